pub mod cli;
pub mod error;
pub mod interface;
pub mod kind;
pub mod parse;
pub mod schema;
pub mod tree;
pub mod walk;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
