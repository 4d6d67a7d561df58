use clap::{Args, Parser, Subcommand};

use crate::cmd::config::{Action, Config, Fit as FitCfg, Formula as FormulaCfg, OutputFormat};

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y in {s:?}: {e}"))?;
    Ok((x, y))
}

#[derive(Debug, Parser)]
#[command(
    name = "expreg",
    about = "Fit y = a * b^x by log-linear least squares",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit observations given on the command line
    Fit(FitArgs),

    /// Exponentiate the coefficients of a linear regression formula
    Formula(FormulaArgs),
}

#[derive(Debug, Args)]
pub struct FitArgs {
    /// Observation as X,Y (repeat for every point)
    #[arg(
        short = 'p',
        long = "point",
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true,
        required = true
    )]
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Args)]
pub struct FormulaArgs {
    /// Formula such as "Predicted = 1.0000 + X0*1.5000"
    #[arg(value_name = "FORMULA")]
    pub text: String,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let action = match self.command {
            Commands::Fit(args) => Action::Fit(FitCfg { points: args.points }),
            Commands::Formula(args) => Action::Formula(FormulaCfg { text: args.text }),
        };
        Config { action, format: self.format }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_point, Cli};
    use crate::cmd::config::{Action, OutputFormat};
    use clap::Parser;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2"), Ok((1.0, 2.0)));
        assert_eq!(parse_point(" -1.5 , 0.25 "), Ok((-1.5, 0.25)));
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,").is_err());
    }

    #[test]
    fn test_fit_args() {
        let cli = Cli::parse_from(["expreg", "fit", "-p", "1,2", "--point=-2,3", "-p", "-3,4"]);
        let cfg = cli.into_config();
        assert_eq!(cfg.format, OutputFormat::Text);
        match cfg.action {
            Action::Fit(fit) => assert_eq!(fit.points, vec![(1.0, 2.0), (-2.0, 3.0), (-3.0, 4.0)]),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_formula_args() {
        let cli = Cli::parse_from([
            "expreg",
            "formula",
            "Predicted = 1.0000 + X0*1.5000",
            "--format",
            "json",
        ]);
        let cfg = cli.into_config();
        assert_eq!(cfg.format, OutputFormat::Json);
        match cfg.action {
            Action::Formula(formula) => assert_eq!(formula.text, "Predicted = 1.0000 + X0*1.5000"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_fit_requires_points() {
        assert!(Cli::try_parse_from(["expreg", "fit"]).is_err());
    }
}
