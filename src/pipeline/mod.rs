// End-to-end pipelines behind the CLI subcommands.

pub mod collect;
pub mod compare;
