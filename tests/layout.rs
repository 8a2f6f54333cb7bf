mod tests {
    use myrtio_strip_player::{
        LayoutPreset, StripLayout,
        color::{BLACK, RED},
        frame::{FrameBuffer, IndexPath, TIER_COUNT, opposite_of},
    };

    fn collect(path: IndexPath) -> Vec<usize> {
        path.iter().collect()
    }

    #[test]
    fn test_linear_edges_walk_out_from_center() {
        let layout = StripLayout::new(LayoutPreset::Linear, 6);

        assert_eq!(collect(layout.edge()), [0, 1, 2, 3, 4, 5]);
        assert_eq!(collect(layout.left_edge()), [2, 1, 0]);
        assert_eq!(collect(layout.right_edge()), [3, 4, 5]);
        assert!(layout.accent().is_empty());
    }

    #[test]
    fn test_linear_tiers_cover_strip_once() {
        let layout = StripLayout::new(LayoutPreset::Linear, 10);

        assert_eq!(collect(layout.tier(0)), [7, 8, 9]);
        assert_eq!(collect(layout.tier(1)), [4, 5, 6]);
        assert_eq!(collect(layout.tier(2)), [0, 1, 2, 3]);

        let mut all: Vec<usize> = (0..TIER_COUNT).flat_map(|t| layout.tier(t).iter()).collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_tree_paths_skip_missing_pixels() {
        let layout = StripLayout::new(LayoutPreset::Tree, 20);

        assert!(layout.edge().iter().all(|i| i < 20));
        assert_eq!(collect(layout.left_edge()), [17, 16, 15, 14, 13, 6, 5, 4, 3, 2, 1, 0]);
        assert!(layout.right_edge().is_empty());
        assert_eq!(layout.left_edge().get(5), Some(6));
        assert_eq!(layout.left_edge().get(12), None);
    }

    #[test]
    fn test_tree_tiers_are_disjoint() {
        let layout = StripLayout::new(LayoutPreset::Tree, 53);

        let mut all: Vec<usize> = (0..TIER_COUNT).flat_map(|t| layout.tier(t).iter()).collect();
        assert_eq!(all.len(), 53);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 53);
        assert!(layout.accent().iter().all(|i| collect(layout.tier(2)).contains(&i)));
    }

    #[test]
    fn test_frame_buffer_resize_blanks_dropped_pixels() {
        let mut buffer = FrameBuffer::<8>::new(8);
        buffer.as_mut_slice().fill(RED);

        buffer.resize(3);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice(), [RED; 3]);

        buffer.resize(20);
        assert_eq!(buffer.len(), 8);
        assert_eq!(&buffer.as_slice()[3..], [BLACK; 5]);
    }

    #[test]
    fn test_opposite_of() {
        assert_eq!(opposite_of(0, 10), 5);
        assert_eq!(opposite_of(7, 10), 2);
        assert_eq!(opposite_of(0, 1), 0);
        assert_eq!(opposite_of(3, 0), 0);
    }
}
