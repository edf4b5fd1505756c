use anyhow::{Context, Result};
use serde::Serialize;

/// One synthetic customer, same columns as the public bank-marketing CSV.
#[derive(Serialize)]
struct Customer {
    age: i64,
    job: &'static str,
    marital: &'static str,
    education: &'static str,
    default: &'static str,
    balance: i64,
    housing: &'static str,
    loan: &'static str,
    contact: &'static str,
    day: u32,
    month: &'static str,
    duration: u32,
    campaign: u32,
    pdays: i64,
    previous: u32,
    poutcome: &'static str,
    deposit: &'static str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const JOBS: [&str; 12] = [
    "admin.",
    "technician",
    "services",
    "management",
    "retired",
    "blue-collar",
    "unemployed",
    "entrepreneur",
    "housemaid",
    "unknown",
    "self-employed",
    "student",
];
const MARITAL: [&str; 3] = ["married", "single", "divorced"];
const EDUCATION: [&str; 4] = ["secondary", "tertiary", "primary", "unknown"];
const CONTACT: [&str; 3] = ["cellular", "telephone", "unknown"];
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const POUTCOME: [&str; 3] = ["failure", "other", "success"];

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn generate_customer(rng: &mut SimpleRng) -> Customer {
    let job = rng.pick(&JOBS);
    let age = match job {
        "student" => rng.gauss(24.0, 3.0),
        "retired" => rng.gauss(66.0, 7.0),
        _ => rng.gauss(41.0, 10.0),
    }
    .round()
    .clamp(18.0, 95.0) as i64;

    // Heavy right tail with a minority of overdrawn accounts.
    let balance = if rng.chance(0.08) {
        -(rng.below(2000) as i64)
    } else {
        (rng.gauss(0.0, 1.0).abs() * 1500.0 + rng.gauss(0.0, 1.0).powi(2) * 800.0).round() as i64
    };

    let previous = if rng.chance(0.75) { 0 } else { 1 + rng.below(6) as u32 };
    let (pdays, poutcome) = if previous == 0 {
        (-1, "unknown")
    } else {
        (1 + rng.below(400) as i64, rng.pick(&POUTCOME))
    };

    Customer {
        age,
        job,
        marital: rng.pick(&MARITAL),
        education: rng.pick(&EDUCATION),
        default: yes_no(rng.chance(0.02)),
        balance,
        housing: yes_no(rng.chance(0.47)),
        loan: yes_no(rng.chance(0.13)),
        contact: rng.pick(&CONTACT),
        day: 1 + rng.below(31) as u32,
        month: rng.pick(&MONTHS),
        duration: (rng.gauss(0.0, 1.0).abs() * 350.0).round() as u32 + 2,
        campaign: 1 + rng.below(6) as u32,
        pdays,
        previous,
        poutcome,
        deposit: yes_no(rng.chance(0.47)),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 2000;

    let output_path = "sample_bank.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for _ in 0..n_rows {
        writer
            .serialize(generate_customer(&mut rng))
            .context("writing customer row")?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_rows} customers to {output_path}");
    Ok(())
}
