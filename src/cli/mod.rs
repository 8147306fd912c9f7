mod cmds;
mod menu;
mod output;
mod prompt;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
