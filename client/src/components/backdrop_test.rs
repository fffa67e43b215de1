use super::*;

#[test]
fn plain_has_no_layers() {
    assert!(layer_classes(Backdrop::Plain).is_empty());
}

#[test]
fn glow_is_dark_mode_only() {
    assert!(container_class(Backdrop::Glow).contains("dark:block"));
    assert!(container_class(Backdrop::Glow).contains("hidden"));
    assert_eq!(layer_classes(Backdrop::Glow).len(), 2);
}

#[test]
fn aurora_layers_are_animated() {
    let layers = layer_classes(Backdrop::Aurora);
    assert!(!layers.is_empty());
    assert!(layers.iter().all(|class| class.contains("animate-")));
    assert!(!container_class(Backdrop::Aurora).contains("hidden"));
}
