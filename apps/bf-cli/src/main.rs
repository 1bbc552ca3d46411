use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bf_case::{CaseError, CaseResult, compile_case, load_case};
use bf_path::sample_path;
use bf_profile::{ProfileError, compute_profile, sweep_flow_rates};

#[derive(Parser)]
#[command(name = "bf-cli")]
#[command(about = "Boreflow CLI - Annular pressure profiling tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Sample the trajectory and export the path table
    Sample {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the pressure profile for a case
    Run {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Export the full profile as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Export the full outcome as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Sweep flow rates and report the peak pressure at each
    Sweep {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Lowest flow rate [m³/s]
        #[arg(long)]
        from: f64,
        /// Highest flow rate [m³/s]
        #[arg(long)]
        to: f64,
        /// Number of evenly spaced flow rates
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout table)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CaseResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Sample { case_path, output } => cmd_sample(&case_path, output.as_deref()),
        Commands::Run {
            case_path,
            csv,
            json,
        } => cmd_run(&case_path, csv.as_deref(), json.as_deref()),
        Commands::Sweep {
            case_path,
            from,
            to,
            points,
            output,
        } => cmd_sweep(&case_path, from, to, points, output.as_deref()),
    }
}

fn cmd_validate(case_path: &Path) -> CaseResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load_case(case_path)?;
    println!("✓ Case '{}' is valid", case.name);
    Ok(())
}

fn cmd_sample(case_path: &Path, output: Option<&Path>) -> CaseResult<()> {
    let case = load_case(case_path)?;
    let compiled = compile_case(&case)?;
    let samples = sample_path(&compiled.trajectory, compiled.step_m).map_err(ProfileError::from)?;

    let mut csv = String::from("md_m,z_m,theta_rad,segment\n");
    for i in 0..samples.len() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            samples.md_m[i], samples.z_m[i], samples.theta_rad[i], samples.segment[i]
        ));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} samples to {}", samples.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_run(case_path: &Path, csv: Option<&Path>, json: Option<&Path>) -> CaseResult<()> {
    println!("Running case: {}", case_path.display());

    let case = load_case(case_path)?;
    let compiled = compile_case(&case)?;
    tracing::debug!(case = %compiled.name, model = compiled.fluid.name(), "case compiled");

    let outcome = compute_profile(&compiled.request())?;

    println!(
        "✓ Computed {} samples over {:.1} m of hole",
        outcome.samples.len(),
        outcome.samples.total_length_m()
    );

    println!("\nHydraulics:");
    println!("  Model:              {}", compiled.fluid.name());
    println!("  Flow area:          {:.6} m²", outcome.hydraulics.flow_area_m2);
    println!(
        "  Hydraulic diameter: {:.4} m",
        outcome.hydraulics.hydraulic_diameter_m
    );
    println!("  Mean velocity:      {:.4} m/s", outcome.hydraulics.velocity_mps);
    if let Some(re) = outcome.hydraulics.reynolds {
        println!("  Reynolds number:    {:.0}", re);
    }
    println!(
        "  Friction gradient:  {:.3} Pa/m",
        outcome.hydraulics.gradient_pa_m
    );

    let max = &outcome.max_total;
    println!("\nMax total pressure:");
    println!(
        "  {:.1} Pa at md {:.1} m (z {:.1} m, sample {})",
        max.total_pa, max.md_m, max.z_m, max.index
    );

    if !outcome.advisories.is_empty() {
        println!("\nAdvisories:");
        for advisory in &outcome.advisories {
            println!("  - {}", advisory);
        }
    }

    if let Some(path) = csv {
        let content = profile_csv(&outcome);
        std::fs::write(path, content)?;
        println!("\n✓ Exported profile CSV to {}", path.display());
    }
    if let Some(path) = json {
        let content = serde_json::to_string_pretty(&outcome)?;
        std::fs::write(path, content)?;
        println!("✓ Exported outcome JSON to {}", path.display());
    }

    Ok(())
}

fn profile_csv(outcome: &bf_profile::ComputeOutcome) -> String {
    let samples = &outcome.samples;
    let profile = &outcome.profile;
    let mut csv =
        String::from("md_m,z_m,theta_rad,segment,hydrostatic_pa,friction_pa,total_pa\n");
    for i in 0..samples.len() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            samples.md_m[i],
            samples.z_m[i],
            samples.theta_rad[i],
            samples.segment[i],
            profile.hydrostatic_pa[i],
            profile.friction_pa[i],
            profile.total_pa[i]
        ));
    }
    csv
}

fn cmd_sweep(
    case_path: &Path,
    from: f64,
    to: f64,
    points: usize,
    output: Option<&Path>,
) -> CaseResult<()> {
    let mut violations = Vec::new();
    if !from.is_finite() || from < 0.0 {
        violations.push(format!("sweep: --from must be non-negative and finite (got {from})"));
    }
    if !to.is_finite() || to < from {
        violations.push(format!("sweep: --to must be finite and at least --from (got {to})"));
    }
    if points == 0 {
        violations.push("sweep: --points must be at least 1".to_string());
    }
    if !violations.is_empty() {
        return Err(CaseError::InputValidationFailed { violations });
    }

    let case = load_case(case_path)?;
    let compiled = compile_case(&case)?;

    let rates = linspace(from, to, points);
    let result = sweep_flow_rates(&compiled.request(), &rates)?;

    println!(
        "✓ Swept {} flow rates ({} successful, {} failed)",
        result.points.len(),
        result.num_successful,
        result.num_failed
    );

    let mut csv = String::from(
        "q_m3_s,velocity_mps,reynolds,gradient_pa_m,max_total_pa,max_md_m,advisories\n",
    );
    for (slot, &q) in result.points.iter().zip(&rates) {
        match slot {
            Some(point) => {
                let re = point
                    .reynolds
                    .map(|r| format!("{r}"))
                    .unwrap_or_default();
                csv.push_str(&format!(
                    "{},{},{},{},{},{},{}\n",
                    point.flow_rate_m3_s,
                    point.velocity_mps,
                    re,
                    point.gradient_pa_m,
                    point.max_total.total_pa,
                    point.max_total.md_m,
                    point.advisories.len()
                ));
            }
            None => {
                csv.push_str(&format!("{q},,,,,,failed\n"));
            }
        }
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported sweep CSV to {}", path.display());
    } else {
        print!("{}", csv);
    }

    if let Some(worst) = result.worst_case() {
        println!(
            "Worst case: {:.1} Pa at q = {:.4} m³/s",
            worst.max_total.total_pa, worst.flow_rate_m3_s
        );
    }

    Ok(())
}

/// Evenly spaced flow rates, inclusive of both ends.
fn linspace(from: f64, to: f64, points: usize) -> Vec<f64> {
    if points == 1 {
        return vec![from];
    }
    let dq = (to - from) / (points - 1) as f64;
    (0..points).map(|i| from + dq * i as f64).collect()
}
