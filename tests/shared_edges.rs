
extern crate uiraster;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use uiraster::{DrawVert, PaintTarget, PixelBox, Rectangle};

const W: usize = 40;
const H: usize = 40;

fn covered(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Vec<bool> {
    let mut px = vec![0u32; W * H];
    let mut t = PaintTarget::new(&mut px, W, H).unwrap();
    let clip = Rectangle::from_array(uiraster::DEFAULT_CLIP_RECT);
    let v = |p: (f32, f32)| DrawVert::new(p, (0.0, 0.0), 0xFFFF_FFFF);
    uiraster::paint_triangle(&mut t, None, &clip, &v(a), &v(b), &v(c), true);
    px.iter().map(|&p| p != 0).collect()
}

/// Coordinates on a half pixel grid hit pixel centers and edges often
fn coord(rng: &mut StdRng) -> f32 {
    rng.gen_range(0..2 * W as i32) as f32 * 0.5
}

fn random_point(rng: &mut StdRng) -> (f32, f32) {
    (coord(rng), coord(rng))
}

#[test]
fn split_quad_covers_each_pixel_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let (x1, x2) = (coord(&mut rng), coord(&mut rng));
        let (y1, y2) = (coord(&mut rng), coord(&mut rng));
        let (x1, x2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        let (a, b, c, d) = ((x1, y1), (x2, y1), (x2, y2), (x1, y2));

        // Both diagonals and both windings
        let splits = [
            ((a, b, c), (a, c, d)),
            ((a, c, b), (a, d, c)),
            ((b, c, d), (d, a, b)),
            ((b, d, c), (b, a, d)),
        ];
        let expect = PixelBox::from_span(x1, y1, x2, y2);
        for &(t1, t2) in splits.iter() {
            let p = covered(t1.0, t1.1, t1.2);
            let q = covered(t2.0, t2.1, t2.2);
            for y in 0..H {
                for x in 0..W {
                    let i = y * W + x;
                    assert!(!(p[i] && q[i]), "pixel {},{} painted twice", x, y);
                    assert_eq!(p[i] || q[i], expect.contains(x as i64, y as i64),
                               "pixel {},{} of {:?}", x, y, (x1, y1, x2, y2));
                }
            }
        }
    }
}

#[test]
fn triangle_fan_never_paints_twice() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let center = random_point(&mut rng);
        let rim: Vec<_> = (0..6).map(|_| random_point(&mut rng)).collect();
        // Arbitrary fans may fold over, so only neighbors lying on
        // opposite sides of their shared edge are checked
        for k in 0..rim.len() {
            let (a, b, c) = (rim[k], rim[(k + 1) % rim.len()], rim[(k + 2) % rim.len()]);
            let p = covered(center, a, b);
            let q = covered(center, b, c);
            let folded = orient(center, a, b).signum() != orient(center, b, c).signum();
            if !folded {
                assert!(p.iter().zip(q.iter()).all(|(p, q)| !(*p && *q)));
            }
        }
    }
}

#[test]
fn shared_edge_pixels_belong_to_one_side() {
    // Vertical, horizontal and sloped shared edges through pixel centers
    let cases = [
        ((10.5, 2.0), (10.5, 30.0), (2.0, 16.0), (30.0, 16.0)),
        ((2.0, 10.5), (30.0, 10.5), (16.0, 2.0), (16.0, 30.0)),
        ((2.5, 2.5), (30.5, 30.5), (30.0, 2.0), (2.0, 30.0)),
    ];
    for &(e0, e1, l, r) in cases.iter() {
        let p = covered(e0, e1, l);
        let q = covered(e1, e0, r);
        let both = p.iter().zip(q.iter()).filter(|(p, q)| **p && **q).count();
        assert_eq!(both, 0);
        // The edge pixels are painted by someone
        let (cx, cy) = (((e0.0 + e1.0) / 2.0) as usize, ((e0.1 + e1.1) / 2.0) as usize);
        assert!(p[cy * W + cx] || q[cy * W + cx]);
    }
}

fn orient(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
