
extern crate uiraster;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use uiraster::{DrawData, DrawList, GlyphAtlas, PaintOptions, PaintTarget, Painter, PixelBox, Rectangle};

const W: usize = 32;
const H: usize = 24;
const SENTINEL: u32 = 0x1234_5678;

fn allowed(clip: [f32; 4], scale: (f32, f32), origin: (f32, f32)) -> PixelBox {
    let mut px = vec![0u32; W * H];
    let t = PaintTarget::new(&mut px, W, H).unwrap().with_scale(scale.0, scale.1);
    t.clip_box(&Rectangle::from_array(clip).translate(origin.0, origin.1))
}

fn random_list(rng: &mut StdRng, white: (f32, f32)) -> (DrawList, [f32; 4]) {
    let mut list = DrawList::new(white);
    let x1 = rng.gen_range(-5.0..W as f32);
    let y1 = rng.gen_range(-5.0..H as f32);
    let clip = [x1, y1, x1 + rng.gen_range(0.0..20.0), y1 + rng.gen_range(0.0..20.0)];
    list.push_clip_rect(clip);
    for _ in 0..20 {
        let p = |rng: &mut StdRng| -> (f32, f32) { (rng.gen_range(-10.0..50.0), rng.gen_range(-10.0..40.0)) };
        match rng.gen_range(0..3) {
            0 => {
                let (a, c) = (p(rng), p(rng));
                list.prim_rect(a, c, rng.gen::<u32>() | 0x0100_0000);
            }
            1 => {
                let (a, c) = (p(rng), p(rng));
                list.prim_rect_uv(a, c, (0.0, 0.0), (1.0, 1.0), 0xFFFF_FFFF);
            }
            _ => {
                let cols = [rng.gen::<u32>() | 0xFF00_0000, rng.gen(), rng.gen()];
                list.add_triangle([p(rng), p(rng), p(rng)], cols);
            }
        }
    }
    (list, clip)
}

#[test]
fn nothing_is_written_outside_the_clip_rectangle() {
    let mut rng = StdRng::seed_from_u64(21);
    let atlas = GlyphAtlas::new(vec![255; 9], 3, 3).unwrap();
    let white = atlas.white_uv();
    let mut painter = Painter::new();
    painter.bind(atlas).unwrap();

    for round in 0..100 {
        let (list, clip) = random_list(&mut rng, white);
        let mut data = DrawData::new((W as f32, H as f32));
        if round % 2 == 1 {
            data.display_size = (W as f32 / 2.0, H as f32 / 2.0);
            data.display_pos = (3.0, -2.0);
        }
        let scale = (W as f32 / data.display_size.0, H as f32 / data.display_size.1);
        let origin = data.display_pos;
        data.cmd_lists.push(list);

        for options in [PaintOptions::new(), PaintOptions::new().general_only()].iter() {
            painter.set_options(*options);
            let mut px = vec![SENTINEL; W * H];
            painter.paint(&data, &mut px, W, H).unwrap();
            let ok = allowed(clip, scale, origin);
            for y in 0..H {
                for x in 0..W {
                    if !ok.contains(x as i64, y as i64) {
                        assert_eq!(px[y * W + x], SENTINEL, "round {} pixel {},{}", round, x, y);
                    }
                }
            }
        }
    }
}

#[test]
fn clip_rectangle_edges_use_pixel_centers() {
    let atlas = GlyphAtlas::new(vec![255; 4], 2, 2).unwrap();
    let white = atlas.white_uv();
    let mut painter = Painter::new();
    painter.bind(atlas).unwrap();

    let mut list = DrawList::new(white);
    list.push_clip_rect([2.5, 1.0, 6.5, 3.0]);
    list.prim_rect((0.0, 0.0), (8.0, 4.0), 0xFF00_FF00);
    let mut data = DrawData::new((8.0, 4.0));
    data.cmd_lists.push(list);

    let mut px = vec![0u32; 8 * 4];
    painter.paint(&data, &mut px, 8, 4).unwrap();
    // Centers 2.5 through 5.5 on x, 1.5 and 2.5 on y
    for y in 0..4 {
        for x in 0..8 {
            let inside = (2..6).contains(&x) && (1..3).contains(&y);
            assert_eq!(px[y * 8 + x] != 0, inside, "{},{}", x, y);
        }
    }
}

#[test]
fn geometry_outside_the_target_is_ignored() {
    let atlas = GlyphAtlas::new(vec![255; 4], 2, 2).unwrap();
    let white = atlas.white_uv();
    let mut painter = Painter::new();
    painter.bind(atlas).unwrap();

    let mut list = DrawList::new(white);
    list.prim_rect((-100.0, -100.0), (-10.0, -10.0), 0xFFFF_FFFF);
    list.add_triangle([(100.0, 0.0), (200.0, 0.0), (150.0, 50.0)], [0xFFFF_FFFF; 3]);
    list.add_triangle([(-1.0e9, -1.0e9), (1.0e9, -1.0e9), (0.0, 1.0e9)], [0xFF00_0000; 3]);
    let mut data = DrawData::new((8.0, 8.0));
    data.cmd_lists.push(list);

    let mut px = vec![7u32; 64];
    let stats = painter.paint(&data, &mut px, 8, 8).unwrap();
    assert_eq!(stats.clipped, 2);
    assert_eq!(stats.triangles, 1);
    // Far coordinates are clamped, the huge triangle still covers everything
    assert!(px.iter().all(|&p| p == 0xFF00_0000));
}
