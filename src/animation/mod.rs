pub(crate) mod tween;
