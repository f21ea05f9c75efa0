use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Test, verification and benchmark automation for wfa-commons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the test suite under every feature combination
    TestMatrix,
    /// Runs the Kani bit-manipulation proofs
    Kani {
        /// Run a single harness instead of all of them
        #[arg(long)]
        harness: Option<String>,
    },
    /// Runs the bench-suite binary natively
    Bench {
        /// Backend to time; both are timed if omitted
        #[arg(long, short, value_enum)]
        backend: Option<Backend>,

        /// Run with --release
        #[arg(long, default_value_t = true)]
        release: bool,

        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,

        /// Random words per sweep
        #[arg(long, short)]
        words: Option<usize>,
    },
    /// Checks compilation on hosted and bare-metal targets
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Backend {
    Auto,
    Hardware,
    Software,
}

impl Backend {
    fn as_arg(self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Hardware => "hardware",
            Backend::Software => "software",
        }
    }
}

/// Feature combinations the library must pass under.
const FEATURE_MATRIX: [(&str, &[&str]); 3] = [
    ("default", &[]),
    ("software-fallback", &["--features", "software-fallback"]),
    ("no-default-features", &["--no-default-features", "--lib"]),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::TestMatrix => test_matrix(&sh)?,
        Commands::Kani { harness } => run_kani(&sh, harness)?,
        Commands::Bench {
            backend,
            release,
            pin_core,
            words,
        } => run_bench(&sh, backend, release, pin_core, words)?,
        Commands::CheckAll => check_all(&sh)?,
    }

    Ok(())
}

fn test_matrix(sh: &Shell) -> Result<()> {
    for (label, flags) in FEATURE_MATRIX {
        println!("--- Testing wfa-commons [{}] ---", label);
        cmd!(sh, "cargo test -p wfa-commons {flags...}").run()?;
    }

    println!("--- Testing bench-suite ---");
    cmd!(sh, "cargo test -p bench-suite").run()?;

    println!(">> Feature matrix passed.");
    Ok(())
}

fn run_kani(sh: &Shell, harness: Option<String>) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        anyhow::bail!("'cargo kani' is not installed (see https://model-checking.github.io/kani/)");
    }
    let harness_args: Vec<String> = harness
        .into_iter()
        .flat_map(|h| ["--harness".to_string(), h])
        .collect();

    println!(">> Running Kani proofs...");
    cmd!(sh, "cargo kani -p wfa-commons {harness_args...}").run()?;
    Ok(())
}

fn run_bench(
    sh: &Shell,
    backend: Option<Backend>,
    release: bool,
    pin_core: Option<usize>,
    words: Option<usize>,
) -> Result<()> {
    let profile_flag = if release { "--release" } else { "" };

    let mut app_args = Vec::new();
    if let Some(b) = backend {
        app_args.push(format!("--backend {}", b.as_arg()));
    }
    if let Some(n) = words {
        app_args.push(format!("--words {}", n));
    }

    let prefix = match pin_core {
        Some(c) => format!("taskset -c {} ", c),
        None => String::new(),
    };

    println!(">> Benchmarking bit intrinsics (native)...");
    if let Some(c) = pin_core {
        println!("   (Pinned to Core {})", c);
    }

    // Let the hardware path use whatever the build host supports.
    let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=native");
    let cmd_str = format!(
        "{}cargo run -p bench-suite {} -- {}",
        prefix,
        profile_flag,
        app_args.join(" ")
    );
    cmd!(sh, "bash -c {cmd_str}").run()?;
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    println!("--- Checking x86-64 (baseline, no popcnt) ---");
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64");
        cmd!(sh, "cargo check --workspace --all-targets --release").run()?;
    }

    println!("--- Checking Aarch64 ---");
    ensure_cross(sh)?;
    cmd!(
        sh,
        "cross check --target aarch64-unknown-linux-gnu -p wfa-commons --release"
    )
    .run()?;

    println!("--- Checking Armv7r (no_std) ---");
    ensure_target(sh, "armv7r-none-eabi")?;
    cmd!(
        sh,
        "cargo check --target armv7r-none-eabi -p wfa-commons --no-default-features --release"
    )
    .run()?;

    println!(">> All targets checked successfully.");
    Ok(())
}

fn ensure_cross(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cross --version").read().is_err() {
        println!("!! 'cross' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install cross").run()?;
    }
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}
