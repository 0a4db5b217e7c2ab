mod maths_utils;

pub(crate) use maths_utils::{fade_pct, get_max, get_min};
