//! The 64-round compression function

use crate::constants::K;
use crate::schedule::MessageSchedule;
use crate::state::HashState;
use crate::word::{add, big_sigma0, big_sigma1, ch, maj};

/// Working registers `a..h` for one block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkingState {
    /// Register a
    pub a: u32,
    /// Register b
    pub b: u32,
    /// Register c
    pub c: u32,
    /// Register d
    pub d: u32,
    /// Register e
    pub e: u32,
    /// Register f
    pub f: u32,
    /// Register g
    pub g: u32,
    /// Register h
    pub h: u32,
}

impl WorkingState {
    /// Load registers from the current hash state, `a = h0` through `h = h7`
    #[must_use]
    pub fn from_state(state: &HashState) -> Self {
        let [a, b, c, d, e, f, g, h] = state.words();
        Self { a, b, c, d, e, f, g, h }
    }

    /// Registers in `a..h` order
    #[must_use]
    pub fn registers(&self) -> [u32; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }

    /// Apply one round with round constant `k` and message word `w`
    #[inline(always)]
    fn round(&mut self, k: u32, w: u32) {
        let temp1 = add(
            add(add(self.h, big_sigma1(self.e)), ch(self.e, self.f, self.g)),
            add(k, w),
        );
        let temp2 = add(big_sigma0(self.a), maj(self.a, self.b, self.c));

        self.h = self.g;
        self.g = self.f;
        self.f = self.e;
        self.e = add(self.d, temp1);
        self.d = self.c;
        self.c = self.b;
        self.b = self.a;
        self.a = add(temp1, temp2);
    }
}

/// Run all 64 rounds over `schedule`, starting from a copy of `state`
///
/// The hash state itself is left untouched; accumulation is the caller's job.
#[must_use]
pub fn compress(schedule: &MessageSchedule, state: &HashState) -> WorkingState {
    let mut working = WorkingState::from_state(state);
    for (&k, &w) in K.iter().zip(schedule.words()) {
        working.round(k, w);
    }
    working
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    fn abc_schedule() -> MessageSchedule {
        let padded = pad(b"abc").expect("abc pads");
        let block = padded.blocks().next().expect("one block");
        MessageSchedule::from_block(block)
    }

    #[test]
    fn first_round_matches_fips_example() {
        let schedule = abc_schedule();
        let mut working = WorkingState::from_state(&HashState::new());
        working.round(K[0], schedule.word(0));

        assert_eq!(
            working.registers(),
            [
                0x5d6a_ebcd, 0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372,
                0xfa2a_4622, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab,
            ]
        );
    }

    #[test]
    fn final_round_matches_fips_example() {
        let state = HashState::new();
        let working = compress(&abc_schedule(), &state);

        assert_eq!(
            working.registers(),
            [
                0x506e_3058, 0xd39a_2165, 0x04d2_4d6c, 0xb85e_2ce9,
                0x5ef5_0f24, 0xfb12_1210, 0x948d_25b6, 0x961f_4894,
            ]
        );
        assert_eq!(state, HashState::new(), "compression must not touch the state");
    }
}
