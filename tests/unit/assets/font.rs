use super::*;

#[test]
fn missing_reference_degrades_to_builtin_face() {
    let cache = FontCache::new(FontResolver::direct_only());
    let h = cache.get("no/such/font.ttf", 24, true);
    assert!(h.is_builtin());
    assert_eq!(h.size_px(), 24.0);
    assert!(h.is_bold());
    assert!(h.source_path().is_none());
}

#[test]
fn cache_is_keyed_by_reference_size_and_weight() {
    let cache = FontCache::new(FontResolver::direct_only());
    let a = cache.get("Missing", 20, false);
    let b = cache.get("Missing", 20, false);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);

    let c = cache.get("Missing", 22, false);
    let d = cache.get("Missing", 20, true);
    assert!(!Arc::ptr_eq(&a, &c));
    assert!(!Arc::ptr_eq(&a, &d));
    assert_eq!(cache.len(), 3);
}

#[test]
fn zero_size_is_clamped_to_one_pixel() {
    let cache = FontCache::new(FontResolver::direct_only());
    assert_eq!(cache.get("x", 0, false).key().size_px, 1);
}

#[test]
fn concurrent_lookups_share_one_entry() {
    let cache = Arc::new(FontCache::new(FontResolver::direct_only()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get("Shared", 30, false))
        })
        .collect();
    let got: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(cache.len(), 1);
    let first = cache.get("Shared", 30, false);
    for h in got {
        assert_eq!(h.key(), first.key());
        assert!(h.is_builtin());
    }
}

#[test]
fn candidates_prefer_direct_path_then_bold_family_then_fallbacks() {
    let resolver = FontResolver::direct_only().with_search_dir("/fonts");
    let c = resolver.candidates("DejaVuSans", true);
    assert_eq!(c[0], PathBuf::from("DejaVuSans"));
    assert_eq!(c[1], PathBuf::from("/fonts").join("DejaVuSans-Bold.ttf"));
    assert_eq!(c[2], PathBuf::from("/fonts").join("DejaVuSans.ttf"));

    let d = FontResolver::default().candidates("", true);
    assert_eq!(
        d.first().map(PathBuf::as_path),
        Some(Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"))
    );
}

#[test]
fn direct_font_file_is_loaded_as_outline_face() {
    let dir = PathBuf::from("target").join("unit_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fake.ttf");
    std::fs::write(&path, b"not really a font").unwrap();

    let cache = FontCache::new(FontResolver::direct_only());
    let h = cache.get(path.to_str().unwrap(), 16, false);
    assert!(!h.is_builtin());
    assert_eq!(h.source_path(), Some(path.as_path()));
}

#[test]
fn builtin_advances_are_positive() {
    for ch in ['a', 'x', 'W', ' ', '.', '7', 'é', '€'] {
        assert!(builtin_advance_em(ch) > 0.0);
    }
    assert!(builtin_advance_em('W') > builtin_advance_em('i'));
}
