//! Fields command - list the target field catalogue.

use clap::Args;
use console::style;

use idcr_core::KTP_FIELDS;

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Also show the label aliases searched for each field
    #[arg(long)]
    aliases: bool,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    for spec in KTP_FIELDS {
        let inline = if spec.allow_inline { "" } else { " (next-line only)" };
        println!("{}{}", style(spec.key).bold(), inline);
        if args.aliases {
            if spec.aliases.is_empty() {
                println!("    recovered by date pass, no label");
            } else {
                println!("    {}", spec.aliases.join(", "));
            }
        }
    }
    Ok(())
}
