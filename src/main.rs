use clap::Parser;
use log::info;

mod cli;
mod riff;
mod wav;

use crate::cli::Cli;
use crate::riff::writer::ChunkWriter;
use crate::wav::TestPattern;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let pattern = TestPattern {
        sample_rate: cli.sample_rate,
        freq_hz: cli.frequency,
        num_samples: (cli.duration * cli.sample_rate as f32) as usize,
    };

    info!("writing test pattern to {}", cli.output.display());
    let mut writer = ChunkWriter::create(&cli.output)?;
    wav::write_test_pattern(&mut writer, &pattern)?;
    writer.finish()?;

    // Read the file back through an independent wav decoder and dump
    // what it saw, the integrity check the original repro did by hand
    // in an audio editor.
    let reader = hound::WavReader::open(&cli.output)?;
    let spec = reader.spec();
    println!("-- metadata begin --");
    println!("{:?}={:?}", "channels", spec.channels);
    println!("{:?}={:?}", "sample_rate", spec.sample_rate);
    println!("{:?}={:?}", "bits_per_sample", spec.bits_per_sample);
    println!("{:?}={:?}", "sample_format", spec.sample_format);
    println!("{:?}={:?}", "samples", reader.duration());
    println!("-- metadata end --");

    Ok(())
}
