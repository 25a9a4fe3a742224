mod export;

use crate::Cli;
use crate::CommandResult;
use export::ExportCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphsdl")]
pub(crate) enum CommandEnum {
    /// Export one or more JSON-encoded graphs as a single GraphQL SDL document.
    Export(Box<ExportCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Export(cmd) => cmd.run(cli).await
        }
    }
}
