use expreg_core::{parse_formula, ExpReg, ExpRegError, LinReg, Output, Session};
use serde::Serialize;

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub action: Action,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub enum Action {
    Fit(Fit),
    Formula(Formula),
}

#[derive(Debug, Clone)]
pub struct Fit {
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct Formula {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What a finished action reports back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub model: ExpReg,
    pub linear: LinReg,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("regression error: {0}")]
    Regression(#[from] ExpRegError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        let report = self.execute()?;
        println!("{}", self.render(&report)?);
        Ok(())
    }

    pub fn execute(&self) -> Result<Report, CmdError> {
        match &self.action {
            Action::Fit(f) => self.run_fit(f),
            Action::Formula(f) => self.run_formula(f),
        }
    }

    pub fn render(&self, report: &Report) -> Result<String, CmdError> {
        Ok(match self.format {
            OutputFormat::Text => format!("{}\n{}", report.linear.formula(), report.model),
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
        })
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_fit(&self, f: &Fit) -> Result<Report, CmdError> {
        let mut session = Session::new();
        session.init(f.points.iter().copied())?;
        let points = session.input().len();
        if points < f.points.len() {
            tracing::info!(dropped = f.points.len() - points, "ignored points with repeated x");
        }

        session.convert()?;
        session.run()?;
        let linear = session.output().and_then(Output::linear).unwrap_or_default();
        let model = session.result()?;
        tracing::info!(points, a = model.a, b = model.b, "fit finished");

        Ok(Report { model, linear, points: Some(points) })
    }

    fn run_formula(&self, f: &Formula) -> Result<Report, CmdError> {
        let mut output = parse_formula(&f.text)?;
        let linear = output.linear().unwrap_or_default();
        let model = output.exponentiate()?;

        Ok(Report { model, linear, points: None })
    }
}
