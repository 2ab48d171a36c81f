mod output_format;
mod parkmeter_cli;
mod sort_arg;
mod view_args;

pub use output_format::{write_rows, write_schedule, OutputFormat};
pub use parkmeter_cli::{ParkmeterCliArguments, ParkmeterOperation};
pub use sort_arg::SortArg;
pub use view_args::ViewArgs;
