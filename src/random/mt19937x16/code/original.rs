//! Portable lane-by-lane implementation.

use super::{Lanes, LANES};
use crate::random::mt19937::code::{temper, LOWER_MASK, M, MATRIX_A, N, UPPER_MASK};

fn twist_lanes(rows: &mut [[u32; LANES]; N]) {
    for i in 0..N {
        let next = (i + 1) % N;
        let far = (i + M) % N;
        for l in 0..LANES {
            let y = (rows[i][l] & UPPER_MASK) | (rows[next][l] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            rows[i][l] = rows[far][l] ^ (y >> 1) ^ mag;
        }
    }
}

pub fn generate16_original(lanes: &mut Lanes, out: &mut [u32; LANES]) {
    if lanes.index >= N {
        twist_lanes(&mut lanes.rows);
        lanes.index = 0;
    }
    for (o, &w) in out.iter_mut().zip(&lanes.rows[lanes.index]) {
        *o = temper(w);
    }
    lanes.index += 1;
}
