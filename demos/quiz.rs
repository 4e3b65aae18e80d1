use simplelog::*;

use chordear::prelude::*;

// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    // optional seed from the command line, for reproducible rounds
    let seed = std::env::args().nth(1).map(|arg| arg.parse::<u64>()).transpose()?;

    let mut trainer = Trainer::new(MemoryStore::new(), MemoryStore::new(), seed);
    trainer.config_mut().update(|config| config.num_of_chords = 8)?;

    for chord in trainer.next_round() {
        let notes = chord.notes();
        let names = notes.iter().map(|n| n.to_string()).collect::<Vec<_>>();

        // answer with the chord's own notes, and with the root moved up a semitone
        let correct = trainer.check_answer(&chord, &notes);
        let mut wrong_notes = notes.clone();
        if let Some(root) = wrong_notes.first_mut() {
            *root = root.transposed(1);
        }
        let wrong = trainer.check_answer(&chord, &wrong_notes);

        println!(
            "{:<6} {:<10} [{}] -> {:<6} {} / {}",
            chord.to_string(),
            chord.quality().label(),
            names.join(" "),
            notes
                .first()
                .map(|root| notes_to_chord(root, &notes))
                .unwrap_or_else(|| UNKNOWN_CHORD.to_string()),
            if correct { "ok" } else { "miss" },
            if wrong { "ok" } else { "miss" },
        );
    }

    let mistakes = trainer.mistakes().get();
    println!("\nmistakes: {}", mistakes.total());
    for quality in CHORD_QUALITIES {
        println!("  {:<10} {}", quality.label(), mistakes.quality_count(quality));
    }
    Ok(())
}
