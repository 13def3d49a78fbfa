use clap::Args;
use eyre::{Context, Result};
use phplit_dumper::Value;

use super::DumperArgs;

#[derive(Args)]
pub struct FormatCommand {
    /// Statement template, e.g. 'new Foo(?, ...?:)'
    pub template: String,

    /// Template arguments, each a JSON value
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub dumper: DumperArgs,
}

impl FormatCommand {
    pub fn run(&self) -> Result<()> {
        let args = parse_args(&self.args)?;
        let output = self
            .dumper
            .dumper()
            .format(&self.template, &args)
            .wrap_err("Failed to format template")?;
        println!("{}", output);
        Ok(())
    }
}

fn parse_args(args: &[String]) -> Result<Vec<Value>> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            let json: serde_json::Value = serde_json::from_str(arg)
                .wrap_err_with(|| format!("Argument {} is not valid JSON: {}", i + 1, arg))?;
            Ok(json.into())
        })
        .collect()
}
