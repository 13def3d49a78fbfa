use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use phplit_dumper::{Dumper, Value};

use super::DumperArgs;
use crate::input::{self, InputFormat};

#[derive(Args)]
pub struct DumpCommand {
    /// Input file (reads standard input when omitted or "-")
    pub input: Option<PathBuf>,

    /// Input format (defaults to the file extension, then JSON)
    #[arg(short, long, value_enum)]
    pub from: Option<InputFormat>,

    /// Column the expression starts at, for the wrap decision
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// Emit a complete `<?php return ...;` file
    #[arg(long)]
    pub php_file: bool,

    #[command(flatten)]
    pub dumper: DumperArgs,
}

impl DumpCommand {
    pub fn run(&self) -> Result<()> {
        let format = self
            .from
            .unwrap_or_else(|| InputFormat::detect(self.input.as_deref()));
        let text = input::read(self.input.as_deref())?;
        let value = format.parse(&text)?;

        let output = render(&self.dumper.dumper(), &value, self.column, self.php_file)?;
        println!("{}", output);
        Ok(())
    }
}

fn render(dumper: &Dumper, value: &Value, column: usize, php_file: bool) -> Result<String> {
    if php_file {
        let statement = dumper
            .format("return ?;", std::slice::from_ref(value))
            .wrap_err("Failed to render PHP file")?;
        return Ok(format!("<?php\n\ndeclare(strict_types=1);\n\n{}", statement));
    }
    dumper.dump(value, column).wrap_err("Failed to dump value")
}

#[cfg(test)]
mod tests {
    use phplit_dumper::DumperConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_expression() {
        let value = Value::list([1, 2]);
        assert_eq!(render(&Dumper::default(), &value, 0, false).unwrap(), "[1, 2]");
    }

    #[test]
    fn test_render_php_file() {
        let value = Value::map([("debug", true)]);
        assert_eq!(
            render(&Dumper::default(), &value, 0, true).unwrap(),
            "<?php\n\ndeclare(strict_types=1);\n\nreturn ['debug' => true];"
        );
    }

    #[test]
    fn test_render_respects_column() {
        let dumper = Dumper::new(DumperConfig::default().with_wrap_length(12));
        let value = Value::list(["abc"]);

        assert_eq!(render(&dumper, &value, 0, false).unwrap(), "['abc']");
        assert_eq!(render(&dumper, &value, 5, false).unwrap(), "[\n\t'abc',\n]");
    }
}
