use augzip::core::processing::geometry::{
    flip_horizontal, flip_vertical, rotate_90, rotate_180, rotate_270,
};
use augzip::{ChannelOrder, DERIVED_PER_IMAGE, Frame, PipelineParams, augment_with_rng, pipeline_rng};
use proptest::prelude::*;

fn frame_strategy(max_side: usize) -> impl Strategy<Value = Frame> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), w * h * 3)
            .prop_map(move |data| Frame::new(w, h, ChannelOrder::Rgb, data).unwrap())
    })
}

fn square_strategy(max_side: usize) -> impl Strategy<Value = Frame> {
    (1..=max_side).prop_flat_map(|s| {
        prop::collection::vec(any::<u8>(), s * s * 3)
            .prop_map(move |data| Frame::new(s, s, ChannelOrder::Rgb, data).unwrap())
    })
}

proptest! {
    #[test]
    fn horizontal_flip_is_an_involution(frame in frame_strategy(16)) {
        prop_assert_eq!(flip_horizontal(&flip_horizontal(&frame)), frame);
    }

    #[test]
    fn vertical_flip_is_an_involution(frame in frame_strategy(16)) {
        prop_assert_eq!(flip_vertical(&flip_vertical(&frame)), frame);
    }

    #[test]
    fn rotate_180_is_an_involution(frame in frame_strategy(16)) {
        prop_assert_eq!(rotate_180(&rotate_180(&frame)), frame);
    }

    #[test]
    fn quarter_turns_undo_each_other_on_squares(frame in square_strategy(12)) {
        prop_assert_eq!(rotate_270(&rotate_90(&frame)), frame.clone());
        prop_assert_eq!(rotate_90(&rotate_90(&frame)), rotate_180(&frame));
    }

    #[test]
    fn rotations_keep_the_canvas(frame in frame_strategy(16)) {
        for rotated in [rotate_90(&frame), rotate_180(&frame), rotate_270(&frame)] {
            prop_assert_eq!((rotated.width(), rotated.height()), (frame.width(), frame.height()));
        }
    }

    #[test]
    fn augment_yields_seven_frames_of_input_size(frame in frame_strategy(24), seed in any::<u64>()) {
        let params = PipelineParams { seed: Some(seed), ..PipelineParams::default() };
        let derived = augment_with_rng(&frame, &params, &mut pipeline_rng(&params)).unwrap();
        prop_assert_eq!(derived.len(), DERIVED_PER_IMAGE);
        for d in &derived {
            prop_assert_eq!((d.width(), d.height()), (frame.width(), frame.height()));
            prop_assert_eq!(d.data().len(), frame.data().len());
        }
    }

    #[test]
    fn channel_swap_is_an_involution(frame in frame_strategy(8)) {
        prop_assert_eq!(frame.to_order(ChannelOrder::Bgr).to_order(ChannelOrder::Rgb), frame);
    }
}
