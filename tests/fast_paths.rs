
extern crate uiraster;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use uiraster::{DrawData, DrawList, GlyphAtlas, PaintOptions, PaintStats, Painter};

const W: usize = 48;
const H: usize = 32;

fn painter(options: PaintOptions) -> Painter {
    let mut p = Painter::with_options(options);
    p.bind(GlyphAtlas::new(vec![255; 16], 4, 4).unwrap()).unwrap();
    p
}

fn background(rng: &mut StdRng) -> Vec<u32> {
    // Runs of equal pixels, so the color cache gets hits and misses
    let mut px = Vec::with_capacity(W * H);
    while px.len() < W * H {
        let c: u32 = rng.gen();
        let n = rng.gen_range(1..9);
        px.extend(std::iter::repeat(c).take(n));
    }
    px.truncate(W * H);
    px
}

fn paint(data: &DrawData, options: PaintOptions, bg: &[u32]) -> (Vec<u32>, PaintStats) {
    let mut px = bg.to_vec();
    let stats = painter(options).paint(data, &mut px, W, H).unwrap();
    (px, stats)
}

fn coord(rng: &mut StdRng, max: usize) -> f32 {
    // Mix of whole, half and arbitrary positions
    match rng.gen_range(0..3) {
        0 => rng.gen_range(0..max as i32) as f32,
        1 => rng.gen_range(0..max as i32) as f32 + 0.5,
        _ => rng.gen_range(-2.0..max as f32 + 2.0),
    }
}

fn random_rects(rng: &mut StdRng, white: (f32, f32)) -> DrawData {
    let mut list = DrawList::new(white);
    for _ in 0..40 {
        let a = (coord(rng, W), coord(rng, H));
        let c = (coord(rng, W), coord(rng, H));
        let col: u32 = match rng.gen_range(0..3) {
            0 => rng.gen::<u32>() | 0xFF00_0000,
            1 => rng.gen::<u32>() & 0x00FF_FFFF,
            _ => rng.gen(),
        };
        if rng.gen_bool(0.3) {
            let x1 = coord(rng, W);
            let y1 = coord(rng, H);
            list.push_clip_rect([x1, y1, x1 + coord(rng, W), y1 + coord(rng, H)]);
        }
        list.prim_rect(a, c, col);
    }
    let mut data = DrawData::new((W as f32, H as f32));
    data.cmd_lists.push(list);
    data
}

#[test]
fn rectangle_fast_path_matches_triangles() {
    let mut rng = StdRng::seed_from_u64(3);
    let white = GlyphAtlas::new(vec![255; 16], 4, 4).unwrap().white_uv();
    for _ in 0..50 {
        let data = random_rects(&mut rng, white);
        let bg = background(&mut rng);
        let (fast, s1) = paint(&data, PaintOptions::new(), &bg);
        let (slow, s2) = paint(&data, PaintOptions::new().general_only(), &bg);
        let (nocache, _) = paint(&data, PaintOptions::new().color_cache(false), &bg);
        assert_eq!(fast, slow);
        assert_eq!(fast, nocache);
        assert!(s1.uniform_rects + s1.clipped > 0);
        assert_eq!(s2.uniform_rects, 0);
    }
}

#[test]
fn reversed_corners_match_triangles() {
    // Corners given bottom right to top left still form a rectangle
    let white = GlyphAtlas::new(vec![255; 16], 4, 4).unwrap().white_uv();
    let mut list = DrawList::new(white);
    list.prim_rect((30.5, 20.0), (3.0, 2.5), 0x80FF_8040);
    let mut data = DrawData::new((W as f32, H as f32));
    data.cmd_lists.push(list);
    let bg = vec![0x4020_1000; W * H];
    let (fast, stats) = paint(&data, PaintOptions::new(), &bg);
    let (slow, _) = paint(&data, PaintOptions::new().general_only(), &bg);
    assert_eq!(stats.uniform_rects, 1);
    assert_eq!(fast, slow);
}

#[test]
fn glyph_fast_path_matches_triangles_when_opaque() {
    let mut rng = StdRng::seed_from_u64(5);
    let white = GlyphAtlas::new(vec![255; 16], 4, 4).unwrap().white_uv();
    for _ in 0..50 {
        let mut list = DrawList::new(white);
        for _ in 0..30 {
            let a = (coord(&mut rng, W), coord(&mut rng, H));
            let c = (a.0 + rng.gen_range(1.0..12.0), a.1 + rng.gen_range(1.0..12.0));
            let col = rng.gen::<u32>() | 0xFF00_0000;
            list.prim_rect_uv(a, c, (0.5, 0.5), (1.0, 1.0), col);
        }
        let mut data = DrawData::new((W as f32, H as f32));
        data.cmd_lists.push(list);
        let bg = background(&mut rng);
        let (fast, s1) = paint(&data, PaintOptions::new(), &bg);
        let (slow, s2) = paint(&data, PaintOptions::new().general_only(), &bg);
        assert_eq!(fast, slow);
        assert_eq!(s1.glyph_rects, 30);
        assert_eq!(s2.glyph_rects, 0);
        assert_eq!(s2.triangles + s2.clipped + s2.degenerate, 60);
    }
}

#[test]
fn scaled_rectangles_match_triangles() {
    let mut rng = StdRng::seed_from_u64(9);
    let white = GlyphAtlas::new(vec![255; 16], 4, 4).unwrap().white_uv();
    for _ in 0..20 {
        let mut data = random_rects(&mut rng, white);
        // 1.5 device pixels per point horizontally, 0.75 vertically
        data.display_size = (W as f32 / 1.5, H as f32 / 0.75);
        let bg = background(&mut rng);
        let (fast, _) = paint(&data, PaintOptions::new(), &bg);
        let (slow, _) = paint(&data, PaintOptions::new().general_only(), &bg);
        assert_eq!(fast, slow);
    }
}
