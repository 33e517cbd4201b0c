use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "riffw")]
#[command(about = "Incremental RIFF writer, emits a wav test pattern")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Where to write the test pattern
    #[arg(default_value = "testpattern.wav")]
    pub output: PathBuf,

    /// Sample rate of the synthetic signal in Hz
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,

    /// Frequency of the synthetic signal in Hz
    #[arg(long, default_value_t = 440.0)]
    pub frequency: f32,

    /// Length of the synthetic signal in seconds
    #[arg(long, default_value_t = 1.0)]
    pub duration: f32,
}
