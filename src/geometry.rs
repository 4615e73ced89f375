/// Axis-aligned integer rectangles and the collision queries the game needs.
///
/// Coordinates are terminal cells with the origin in the top-left corner;
/// `x` grows to the right and `y` grows downward.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move so the middle of the bottom edge sits at `(cx, bottom)`.
    pub fn set_midbottom(&mut self, cx: i32, bottom: i32) {
        self.x = cx - self.w / 2;
        self.y = bottom - self.h;
    }

    /// Move so the middle of the top edge sits at `(cx, top)`.
    pub fn set_midtop(&mut self, cx: i32, top: i32) {
        self.x = cx - self.w / 2;
        self.y = top;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    /// True when the two rectangles share at least one cell.
    /// Rectangles that merely touch along an edge do not collide.
    pub fn collide_rect(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn collide_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Anything with a bounding box.
pub trait Bounded {
    fn rect(&self) -> Rect;
}

/// Does `rect` overlap any member of `group`?
pub fn collide_any<T: Bounded>(rect: &Rect, group: &[T]) -> bool {
    group.iter().any(|item| rect.collide_rect(&item.rect()))
}

/// Pair every member of `a` with the members of `b` it overlaps.
///
/// Members of `b` are claimed by the first member of `a` that touches them:
/// once claimed they are not offered to later members of `a`. The result lists
/// `(index_in_a, indices_in_b)` for each member of `a` that hit something, in
/// the order of `a`.
pub fn group_collide<A: Bounded, B: Bounded>(a: &[A], b: &[B]) -> Vec<(usize, Vec<usize>)> {
    let mut claimed = vec![false; b.len()];
    let mut hits = Vec::new();

    for (ai, item_a) in a.iter().enumerate() {
        let ra = item_a.rect();
        let touched: Vec<usize> = b
            .iter()
            .enumerate()
            .filter(|(bi, item_b)| !claimed[*bi] && ra.collide_rect(&item_b.rect()))
            .map(|(bi, _)| bi)
            .collect();
        if touched.is_empty() {
            continue;
        }
        for &bi in &touched {
            claimed[bi] = true;
        }
        hits.push((ai, touched));
    }

    hits
}
