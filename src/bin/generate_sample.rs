//! Generate a deterministic sample renewable-energy CSV for manual
//! testing of the dashboard:
//!
//! ```sh
//! cargo run --bin generate_sample -- sample_renewable_data.csv
//! ```

use anyhow::{Context, Result};

const STATES: &[(&str, &[&str])] = &[
    ("TX", &["Austin", "Lubbock", "Amarillo", "Midland"]),
    ("CA", &["Fresno", "Bakersfield", "Barstow"]),
    ("AZ", &["Phoenix", "Tucson", "Yuma"]),
    ("NM", &["Albuquerque", "Roswell"]),
    ("CO", &["Pueblo", "Lamar"]),
    ("KS", &["Dodge City", "Garden City"]),
    ("OK", &["Woodward", "Enid"]),
    ("NV", &["Tonopah", "Ely"]),
];

const N_ROWS: usize = 240;

/// Minimal deterministic PRNG (xoshiro256**).
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

    fn range(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller.
    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        mu + sigma * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_renewable_data.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {path}"))?;

    writer.write_record([
        "state",
        "city",
        "wind_speed_50m",
        "wind_speed_100m",
        "wind_speed_150m",
        "avg_wind_speed",
        "wind_speed_increase_rate",
        "annual_dni_value",
        "annual_ghi_value",
        "annual_tilt_value",
        "solar_potential_index",
        "renewable_score",
    ])?;

    for row in 0..N_ROWS {
        let (state, cities) = STATES[rng.range(STATES.len())];
        // Leave the occasional city blank to exercise missing-value paths.
        let city = if row % 40 == 39 {
            ""
        } else {
            cities[rng.range(cities.len())]
        };

        let w50 = rng.gauss(6.5, 1.5).max(0.5);
        let w100 = w50 * rng.gauss(1.15, 0.03).max(1.0);
        let w150 = w100 * rng.gauss(1.08, 0.02).max(1.0);
        let avg_wind = (w50 + w100 + w150) / 3.0;
        let increase_rate = (w150 - w50) / w50;

        let dni = rng.gauss(5.4, 1.0).clamp(1.0, 9.0);
        let ghi = rng.gauss(4.8, 0.8).clamp(1.0, 8.0);
        let tilt = rng.gauss(5.6, 0.9).clamp(1.0, 9.0);
        let solar_index = (dni + ghi + tilt) / (3.0 * 8.0);

        let wind_part = (avg_wind / 12.0).clamp(0.0, 1.0);
        let score = (50.0 * wind_part + 50.0 * solar_index).clamp(0.0, 100.0);

        writer.write_record([
            state.to_string(),
            city.to_string(),
            format!("{w50:.2}"),
            format!("{w100:.2}"),
            format!("{w150:.2}"),
            format!("{avg_wind:.2}"),
            format!("{increase_rate:.4}"),
            format!("{dni:.2}"),
            format!("{ghi:.2}"),
            format!("{tilt:.2}"),
            format!("{solar_index:.4}"),
            format!("{score:.1}"),
        ])?;
    }

    writer.flush().context("writing CSV")?;
    println!("Wrote {N_ROWS} rows to {path}");
    Ok(())
}
