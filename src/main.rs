use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use dcpu16::{Cpu, Register};

#[derive(Parser, Debug)]
#[command(name = "dcpu16", about = "Run a DCPU-16 memory image.")]
struct Args {
    /// Raw memory image: 131072 bytes of big-endian words loaded at $0000.
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Number of instructions to execute before exiting (omit to run until a fault).
    #[arg(long)]
    steps: Option<u64>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut cpu = Cpu::new();
    cpu.load_image_file(&args.image)
        .with_context(|| format!("loading {}", args.image.display()))?;
    info!(image = %args.image.display(), "image loaded");

    let outcome = execute(&mut cpu, args.steps);
    print_state(&cpu);
    outcome
}

/// Run the loaded image. Without a step budget the run only ends on a
/// fault, which is the normal way out. With a budget, a fault before the
/// budget is spent is an error.
fn execute(cpu: &mut Cpu, steps: Option<u64>) -> anyhow::Result<()> {
    match steps {
        Some(n) => {
            let cycles = cpu
                .run_for(n)
                .with_context(|| format!("execution stopped before {n} steps"))?;
            info!(steps = n, cycles, "step budget spent");
        }
        None => {
            let Err(fault) = cpu.run();
            error!(%fault, "execution stopped");
        }
    }
    Ok(())
}

fn print_state(cpu: &Cpu) {
    for r in Register::ALL {
        println!("{}:  0x{:04X}", r.name(), cpu.reg(r));
    }
    println!("PC: 0x{:04X}", cpu.pc());
    println!("SP: 0x{:04X}", cpu.sp());
    println!("O:  0x{:04X}", cpu.o());
    println!("Cycles: {}", cpu.cycles());
}
