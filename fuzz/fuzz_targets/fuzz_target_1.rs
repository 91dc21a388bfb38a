#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vec2d::Vector2d;

fuzz_target!(|setup: Setup| {
    let mut v = setup.start;
    for op in setup.ops {
        match op {
            Op::SetX1(x1) => v.set_x1(x1),
            Op::SetX2(x2) => v.set_x2(x2),
            Op::Set(x1, x2) => v.set(x1, x2),
            Op::Rotate(radians) => v.rotate(radians),
            Op::Normalize => {
                let _ = v.normalize();
            }
            Op::SetMagnitude(m) => {
                let _ = v.set_magnitude(m);
            }
        }
        // The cached length must track the components after every mutation.
        let recomputed = Vector2d::new(v.x1(), v.x2()).length();
        if recomputed.is_finite() {
            assert_eq!(v.length().to_bits(), recomputed.to_bits());
        }
    }
});

#[derive(Debug, Arbitrary)]
struct Setup {
    start: Vector2d,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    SetX1(f32),
    SetX2(f32),
    Set(f32, f32),
    Rotate(f32),
    Normalize,
    SetMagnitude(f32),
}
