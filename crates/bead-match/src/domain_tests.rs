//! Domain-critical regression tests for bead-match.
//!
//! Each test documents the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Channel, Color};
    use crate::matcher::NearestColorMatcher;
    use crate::palette::{Palette, PaletteEntry, PaletteSubset};
    use crate::scan::PatternScanner;

    fn palette(rows: &[(&str, &str, [u8; 3])]) -> Palette {
        Palette::new(
            rows.iter()
                .map(|&(name, code, rgb)| PaletteEntry::new(name, code, Color::from_bytes(rgb)))
                .collect(),
        )
        .unwrap()
    }

    /// Every channel value 0, 17, 34, ... 255 (includes both extremes).
    fn coarse_cube() -> impl Iterator<Item = Color> {
        let steps = || (0..=15u8).map(|i| i * 17);
        steps().flat_map(move |r| steps().flat_map(move |g| steps().map(move |b| Color::new(r, g, b))))
    }

    // ========================================================================
    // GAP 1: Exact palette colors map to themselves
    // ========================================================================

    /// If this breaks, it means: a pixel that already is a bead color gets
    /// replaced by a different bead, so a pattern drawn in palette colors
    /// does not survive a conversion unchanged.
    #[test]
    fn test_builtin_palettes_self_match() {
        for subset in PaletteSubset::ALL {
            let palette = subset.palette();
            let matcher = NearestColorMatcher::new(palette);
            for entry in palette.entries() {
                assert_eq!(
                    matcher.find_match(entry.color()).unwrap().name(),
                    entry.name(),
                    "palette '{}'",
                    subset
                );
            }
        }
    }

    /// If this breaks, it means: the tri-search itself (without the exact
    /// lookup) drifted. The built-in palettes have no channel ties that
    /// would make an entry lose to a neighbour, so the bare search must
    /// self-match on them too.
    #[test]
    fn test_builtin_palettes_self_match_without_exact_lookup() {
        for subset in PaletteSubset::ALL {
            let palette = subset.palette();
            let matcher = NearestColorMatcher::new(palette).preserve_exact_matches(false);
            for entry in palette.entries() {
                assert_eq!(
                    matcher.find_match(entry.color()).unwrap().name(),
                    entry.name(),
                    "palette '{}'",
                    subset
                );
            }
        }
    }

    /// If this breaks, it means: the exact lookup no longer runs before the
    /// tri-search. With ties on red and blue both channels enter at
    /// "Azure", which then wins the search for "Blue"'s own color.
    #[test]
    fn test_exact_lookup_rescues_tied_channels() {
        let palette = palette(&[("Azure", "1", [0, 100, 200]), ("Blue", "2", [0, 0, 200])]);
        let blue = Color::new(0, 0, 200);

        let bare = NearestColorMatcher::new(&palette).preserve_exact_matches(false);
        assert_eq!(bare.find_match(blue).unwrap().name(), "Azure");

        let matcher = NearestColorMatcher::new(&palette);
        assert_eq!(matcher.find_match(blue).unwrap().name(), "Blue");
    }

    // ========================================================================
    // GAP 2: The search always terminates inside the arrays
    // ========================================================================

    /// If this breaks, it means: a cursor walks off the sorted array or the
    /// rounds run out for some pixel. The narrow palette sits entirely
    /// inside 90..=130, so pixels at 0 and 255 force both clamped states.
    #[test]
    fn test_search_terminates_for_full_channel_range() {
        let narrow = palette(&[
            ("A", "1", [100, 100, 100]),
            ("B", "2", [120, 90, 110]),
            ("C", "3", [110, 130, 105]),
        ]);
        let palettes = [
            PaletteSubset::Full.palette(),
            PaletteSubset::Starter.palette(),
            &narrow,
        ];

        for palette in palettes {
            let matcher = NearestColorMatcher::new(palette).preserve_exact_matches(false);
            for color in coarse_cube() {
                assert!(
                    matcher.find_match(color).is_ok(),
                    "no match for {} in a {}-entry palette",
                    color,
                    palette.len()
                );
            }
            for v in 0..=255u8 {
                for color in [
                    Color::new(v, v, v),
                    Color::new(v, 0, 255),
                    Color::new(255 - v, v, 0),
                ] {
                    assert!(matcher.find_match(color).is_ok(), "no match for {}", color);
                }
            }
        }
    }

    /// If this breaks, it means: the clamped walk is picking the wrong
    /// direction at the walls. Values below the narrow palette must land on
    /// the darkest entry and values above it on the brightest.
    #[test]
    fn test_out_of_range_pixels_on_narrow_palette() {
        let narrow = palette(&[
            ("A", "1", [100, 100, 100]),
            ("B", "2", [120, 90, 110]),
            ("C", "3", [110, 130, 105]),
        ]);
        let matcher = NearestColorMatcher::new(&narrow);

        assert_eq!(matcher.find_match(Color::new(0, 0, 0)).unwrap().name(), "A");
        assert_eq!(
            matcher.find_match(Color::new(255, 255, 255)).unwrap().name(),
            "C"
        );
        assert_eq!(
            matcher.find_match(Color::new(255, 0, 255)).unwrap().name(),
            "B"
        );
    }

    // ========================================================================
    // GAP 3: Channel sort is stable
    // ========================================================================

    /// If this breaks, it means: the per-channel sort became unstable, so
    /// entries with equal channel values come out in arbitrary order and
    /// matches change between runs or platforms.
    #[test]
    fn test_channel_sort_keeps_declaration_order_for_ties() {
        let forward = palette(&[
            ("First", "1", [50, 10, 200]),
            ("Second", "2", [50, 20, 100]),
            ("Third", "3", [50, 30, 0]),
        ]);
        let reversed = palette(&[
            ("Third", "3", [50, 30, 0]),
            ("Second", "2", [50, 20, 100]),
            ("First", "1", [50, 10, 200]),
        ]);

        let names = |p: &Palette| -> Vec<String> {
            NearestColorMatcher::new(p)
                .channel_order(Channel::Red)
                .map(|e| e.name().to_string())
                .collect()
        };
        assert_eq!(names(&forward), vec!["First", "Second", "Third"]);
        assert_eq!(names(&reversed), vec!["Third", "Second", "First"]);

        // Non-tied channels are ordered by value regardless of declaration.
        let blue: Vec<&str> = NearestColorMatcher::new(&reversed)
            .channel_order(Channel::Blue)
            .map(|e| e.name())
            .collect();
        assert_eq!(blue, vec!["Third", "Second", "First"]);
    }

    // ========================================================================
    // GAP 4: Scan bookkeeping
    // ========================================================================

    /// If this breaks, it means: the black bead count on the materials list
    /// is wrong for the simplest possible input.
    #[test]
    fn test_all_black_image_on_four_color_palette() {
        let palette = palette(&[
            ("Black", "18", [46, 47, 50]),
            ("White", "01", [241, 241, 241]),
            ("Yellow", "03", [236, 216, 0]),
            ("Orange", "04", [237, 97, 32]),
        ]);
        let scanner = PatternScanner::new(&palette);
        let pixels = vec![Color::new(46, 47, 50); 16];
        let result = scanner.scan(&pixels, 4, 4).unwrap();

        assert_eq!(result.grid().height(), 4);
        assert_eq!(result.grid().width(), 4);
        assert!(result
            .grid()
            .cells()
            .iter()
            .all(|cell| cell.entry().name() == "Black"));
        assert_eq!(result.usage().get("Black"), 16);
        assert_eq!(result.usage().len(), 1);
    }

    /// If this breaks, it means: a uniform image reports beads of colors it
    /// does not contain, or loses some of its own.
    #[test]
    fn test_uniform_image_uses_one_color() {
        let palette = PaletteSubset::Starter.palette();
        let scanner = PatternScanner::new(palette);
        for entry in palette.entries() {
            let pixels = vec![entry.color(); 7 * 5];
            let result = scanner.scan(&pixels, 7, 5).unwrap();
            assert_eq!(result.usage().get(entry.name()), 35);
            assert_eq!(result.usage().len(), 1, "extra colors for {}", entry.name());
        }
    }

    /// If this breaks, it means: pixels are skipped or counted twice, or a
    /// cell points at an entry outside the palette.
    #[test]
    fn test_usage_total_matches_pixel_count() {
        let palette = PaletteSubset::Full.palette();
        let scanner = PatternScanner::new(palette);
        let (width, height) = (29, 29);
        let pixels: Vec<Color> = (0..width * height)
            .map(|i| Color::new((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8))
            .collect();
        let result = scanner.scan(&pixels, width, height).unwrap();

        assert_eq!(result.usage().total(), width * height);
        assert_eq!(result.grid().cells().len(), width * height);
        assert_eq!(result.grid().rows().count(), height);
        for cell in result.grid().cells() {
            assert!(palette
                .entries()
                .iter()
                .any(|e| std::ptr::eq(e, cell.entry())));
        }
        let listed: usize = result.usage().in_palette_order(palette).map(|(_, n)| n).sum();
        assert_eq!(listed, width * height);
    }

    // ========================================================================
    // GAP 5: Name to code lookup
    // ========================================================================

    /// If this breaks, it means: the codes printed next to each bead no
    /// longer match the palette.
    #[test]
    fn test_code_map_has_exactly_declared_entries() {
        let palette = palette(&[("Yellow", "03", [236, 216, 0]), ("Orange", "04", [237, 97, 32])]);
        let mut pairs: Vec<(&str, &str)> = palette
            .code_map()
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
            .collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("Orange", "04"), ("Yellow", "03")]);
    }
}
