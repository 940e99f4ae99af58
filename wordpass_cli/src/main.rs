use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordpass::password::{self, RandomSource};

mod args;
mod report;

/// Logs go to stderr, stdout only carries the report.
fn init_logger() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let color = buf.default_level_style(record.level());

            writeln!(
                buf,
                "{color}{}{color:#} {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let args = args::parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    log::info!(
        "Generating one password and a list of {}, seeded: {}",
        args.count,
        args.seed.is_some()
    );

    let mut stdout = std::io::stdout().lock();

    if let Some(seed) = args.seed {
        run(&mut StdRng::seed_from_u64(seed), args.count, &mut stdout)
    } else {
        run(&mut rand::rng(), args.count, &mut stdout)
    }
}

fn run<R: RandomSource>(source: &mut R, count: usize, out: &mut impl Write) -> Result<()> {
    let single = password::generate_password_with(source);
    let list = password::generate_multiple_passwords_with(source, count);

    report::write(out, &single, &list)?;
    out.flush()?;

    log::debug!("Report written");

    Ok(())
}
