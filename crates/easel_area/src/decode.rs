//! Native modifier and mouse button decoding
//!
//! Stateless translation of native bitmasks into portable flags. Unknown
//! modifier bits are ignored so newer platforms can add flags freely.
//!
//! Native button numbering puts the secondary (right) button second and the
//! middle button third; canonical numbering swaps those two. Every other
//! button keeps its position: native button n is canonical button n + 1.

use easel_platform::{HeldButtons, Modifiers, MouseButton};

/// Shift key flag in a native modifier mask
pub const NATIVE_SHIFT: u64 = 1 << 17;
/// Control key flag in a native modifier mask
pub const NATIVE_CONTROL: u64 = 1 << 18;
/// Option key flag in a native modifier mask
pub const NATIVE_OPTION: u64 = 1 << 19;
/// Command key flag in a native modifier mask
pub const NATIVE_COMMAND: u64 = 1 << 20;

const MODIFIER_BITS: [(u64, Modifiers); 4] = [
    (NATIVE_CONTROL, Modifiers::CTRL),
    (NATIVE_OPTION, Modifiers::ALT),
    (NATIVE_SHIFT, Modifiers::SHIFT),
    (NATIVE_COMMAND, Modifiers::SUPER),
];

/// Decode a native modifier mask
pub fn modifiers(flags: u64) -> Modifiers {
    MODIFIER_BITS
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .fold(Modifiers::empty(), |acc, (_, m)| acc | *m)
}

/// Canonical button for a zero-based native button number
pub fn button(native: u32) -> MouseButton {
    match native {
        1 => MouseButton::RIGHT,
        2 => MouseButton::MIDDLE,
        n => MouseButton::from_zero_based(n),
    }
}

/// Decode a native pressed-buttons mask
///
/// Buttons are listed in ascending bit order. `acting` is left out even when
/// its bit is set; it is reported through the event's down/up field instead.
pub fn held_buttons(mask: u64, acting: Option<MouseButton>) -> HeldButtons {
    let mut held = HeldButtons::new();
    let mut rest = mask;
    while rest != 0 {
        let bit = rest.trailing_zeros();
        rest &= rest - 1;
        let b = button(bit);
        if Some(b) != acting {
            held.push(b);
        }
    }
    held
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(held: &HeldButtons) -> Vec<u32> {
        held.iter().map(|b| b.index()).collect()
    }

    #[test]
    fn test_modifiers_each_bit() {
        assert_eq!(modifiers(NATIVE_CONTROL), Modifiers::CTRL);
        assert_eq!(modifiers(NATIVE_OPTION), Modifiers::ALT);
        assert_eq!(modifiers(NATIVE_SHIFT), Modifiers::SHIFT);
        assert_eq!(modifiers(NATIVE_COMMAND), Modifiers::SUPER);
        assert_eq!(modifiers(0), Modifiers::empty());
    }

    #[test]
    fn test_modifiers_combine_and_ignore_unknown_bits() {
        let flags = NATIVE_SHIFT | NATIVE_COMMAND | (1 << 16) | (1 << 23) | 0xff;
        assert_eq!(modifiers(flags), Modifiers::SHIFT | Modifiers::SUPER);
    }

    #[test]
    fn test_modifier_flags_are_independent() {
        let all = NATIVE_SHIFT | NATIVE_CONTROL | NATIVE_OPTION | NATIVE_COMMAND;
        for (bit, flag) in MODIFIER_BITS {
            let without = modifiers(all & !bit);
            assert!(!without.contains(flag));
            assert_eq!(without | flag, Modifiers::all());
            assert_eq!(modifiers(bit), flag);
        }
    }

    #[test]
    fn test_decoding_is_idempotent() {
        for flags in 0u64..(1 << 4) {
            let native = flags << 17;
            assert_eq!(modifiers(native), modifiers(native));
        }
    }

    #[test]
    fn test_button_swap() {
        assert_eq!(button(0), MouseButton::LEFT);
        assert_eq!(button(1), MouseButton::RIGHT);
        assert_eq!(button(2), MouseButton::MIDDLE);
        assert_eq!(button(3).index(), 4);
        assert_eq!(button(10).index(), 11);
    }

    #[test]
    fn test_held_bits_one_and_two_with_left_acting() {
        let held = held_buttons(0b0110, Some(MouseButton::LEFT));
        assert_eq!(indices(&held), vec![3, 2]);
    }

    #[test]
    fn test_held_excludes_acting_button() {
        let held = held_buttons(0b1111, Some(MouseButton::MIDDLE));
        assert_eq!(indices(&held), vec![1, 3, 4]);
        let held = held_buttons(0b1111, Some(MouseButton::RIGHT));
        assert_eq!(indices(&held), vec![1, 2, 4]);
    }

    #[test]
    fn test_held_high_buttons_map_by_position() {
        let held = held_buttons((1 << 3) | (1 << 7) | (1 << 63), None);
        assert_eq!(indices(&held), vec![4, 8, 64]);
    }

    #[test]
    fn test_held_never_contains_acting() {
        for mask in 0u64..256 {
            for index in 1..=9 {
                let acting = MouseButton::new(index);
                let held = held_buttons(mask, acting);
                assert!(held.iter().all(|b| Some(*b) != acting));

                // Every set bit is reported exactly once unless it is the acting button
                let acting_bit = match index {
                    2 => 2,
                    3 => 1,
                    n => n - 1,
                };
                let acting_held = u32::from(mask & (1 << acting_bit) != 0);
                assert_eq!(held.len() as u32 + acting_held, mask.count_ones());
            }
        }
    }
}
