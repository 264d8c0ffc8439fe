use splice::{
    RippleMode, SequenceBuilder, TrackBuilder, TrackKind, delete_ripple, insert_ripple,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let seq = SequenceBuilder::new("seq_demo", "Demo")
        .track(
            TrackBuilder::new("trk_v1", "Video 1")
                .clip_at("intro", 0.0, 5.0)
                .clip_at("scene", 5.0, 3.0)
                .clip_at("outro", 8.0, 5.0)
                .build(),
        )
        .track(
            TrackBuilder::new("trk_a1", "Music")
                .kind(TrackKind::Audio)
                .clip_at("bed", 5.0, 8.0)
                .build(),
        )
        .build()?;

    let mode = RippleMode {
        enabled: true,
        all_tracks: true,
    };

    let deleted = delete_ripple(&seq, mode, &["intro".to_string()])?;
    println!("delete 'intro' -> {}", serde_json::to_string_pretty(&deleted)?);

    let inserted = insert_ripple(&seq, mode, "trk_v1", 5.0, 2.5)?;
    println!(
        "insert 2.5s at 5s -> {}",
        serde_json::to_string_pretty(&inserted)?
    );

    Ok(())
}
