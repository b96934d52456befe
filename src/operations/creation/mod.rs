mod make_tube;

pub use make_tube::MakeTube;
