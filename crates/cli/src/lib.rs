pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod patterns;
pub mod reader;
pub mod stream;
pub mod trie;
pub mod verbose;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use matcher::{ChunkStats, Fragment, StreamMatcher};
pub use reader::FileReader;
pub use stream::{Chunking, Input, StreamStats};
pub use trie::{PrefixMatch, RadixTrie, TrieError};
