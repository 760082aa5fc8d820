use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{bail, ensure};
    use clap::{Parser, Subcommand};
    use gel_math::{
        Invertible, Matrix, Matrix2, Matrix3, Matrix4,
        scalar::{fast_invsqrt, invsqrt},
    };

    #[derive(Debug, Parser)]
    #[command(about = "The gel math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the determinant of a square matrix
        Determinant {
            /// Number of rows (and columns) in the matrix (2, 3 or 4)
            #[arg(short, long)]
            size: usize,

            /// Matrix elements in row-major order
            #[arg(allow_negative_numbers = true, num_args = 1..)]
            elements: Vec<f64>,
        },
        /// Compute the inverse of a square matrix
        Invert {
            /// Number of rows (and columns) in the matrix (2, 3 or 4)
            #[arg(short, long)]
            size: usize,

            /// Matrix elements in row-major order
            #[arg(allow_negative_numbers = true, num_args = 1..)]
            elements: Vec<f64>,
        },
        /// Compare the exact and the fast inverse square root of a value
        Invsqrt {
            /// Value to take the inverse square root of
            value: f64,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: gel_math::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Determinant { size, elements } => {
                let determinant = gel_log::with_timing_info_logging!(
                    "Computing determinant of {}x{} matrix", size, size;
                    determinant(size, &elements)
                )?;
                println!("{determinant}");
                Ok(())
            }
            Command::Invert { size, elements } => {
                let inverse = gel_log::with_timing_info_logging!(
                    "Inverting {}x{} matrix", size, size;
                    invert(size, &elements)
                )?;
                println!("{inverse}");
                Ok(())
            }
            Command::Invsqrt { value } => {
                ensure!(value > 0.0, "Value must be positive, got {value}");
                let exact = invsqrt(value);
                let fast = fast_invsqrt(value);
                println!("exact: {exact}");
                println!("fast:  {fast}");
                println!("relative error: {:e}", (fast - exact).abs() / exact);
                Ok(())
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                gel_math::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                bail!("The `benchmark` subcommand requires the `benchmark` feature to be enabled.")
            }
        }
    }

    fn determinant(size: usize, elements: &[f64]) -> Result<f64> {
        Ok(match size {
            2 => matrix_from_rows::<2>(elements)?.determinant(),
            3 => matrix_from_rows::<3>(elements)?.determinant(),
            4 => matrix_from_rows::<4>(elements)?.determinant(),
            _ => bail!("Unsupported matrix size {size} (must be 2, 3 or 4)"),
        })
    }

    fn invert(size: usize, elements: &[f64]) -> Result<String> {
        Ok(match size {
            2 => Matrix2::try_inverted(&matrix_from_rows::<2>(elements)?)?.to_string(),
            3 => Matrix3::try_inverted(&matrix_from_rows::<3>(elements)?)?.to_string(),
            4 => Matrix4::try_inverted(&matrix_from_rows::<4>(elements)?)?.to_string(),
            _ => bail!("Unsupported matrix size {size} (must be 2, 3 or 4)"),
        })
    }

    fn matrix_from_rows<const N: usize>(elements: &[f64]) -> Result<Matrix<f64, N>> {
        ensure!(
            elements.len() == N * N,
            "Expected {} elements for a {N}x{N} matrix, got {}",
            N * N,
            elements.len()
        );
        gel_log::debug!("Parsed {N}x{N} matrix elements {elements:?}");
        Ok(Matrix::from_fn(|column, row| elements[N * row + column]))
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
