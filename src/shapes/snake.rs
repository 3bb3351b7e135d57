use std::collections::{HashSet, VecDeque};

use crate::{
    composition::model::{AnimationObject, SnakeParams},
    foundation::color::modify_color_intensity,
    foundation::core::{Bounds, CanvasSize, OverlayMap, PixelData, emit},
    foundation::math::{Rng64, seed_for},
};

/// Cells kept clear along each viewport edge.
const SNAKE_MARGIN: i32 = 2;
/// Chance of a spontaneous turn per step.
const TURN_CHANCE: f64 = 0.03;
/// Intensity of the last body cell.
const TAIL_INTENSITY: f64 = 0.3;
const SNAKE_SALT: u64 = 0x534E_414B;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    fn reverse(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    fn perpendicular(self) -> [Heading; 2] {
        match self {
            Heading::Up | Heading::Down => [Heading::Left, Heading::Right],
            Heading::Left | Heading::Right => [Heading::Up, Heading::Down],
        }
    }

    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Snake {
    /// Head first.
    pub(crate) body: VecDeque<(i32, i32)>,
    pub(crate) heading: Heading,
    rng: Rng64,
    length: usize,
}

impl Snake {
    fn spawn(seed: u64, area: Bounds, length: usize) -> Self {
        let mut rng = Rng64::new(seed);
        let x = area.x + rng.next_index(area.width as usize) as i32;
        let y = area.y + rng.next_index(area.height as usize) as i32;
        let heading = Heading::ALL[rng.next_index(Heading::ALL.len())];
        Self {
            body: VecDeque::from([(x, y)]),
            heading,
            rng,
            length: length.max(1),
        }
    }

    fn head(&self) -> (i32, i32) {
        self.body[0]
    }

    fn pick(&mut self, options: &[Heading]) -> Option<Heading> {
        if options.is_empty() {
            return None;
        }
        Some(options[self.rng.next_index(options.len())])
    }

    fn advance(&mut self, area: Bounds, occupied: Option<&HashSet<(i32, i32)>>) {
        let head = self.head();
        let inside = |h: Heading| {
            let (x, y) = h.step(head);
            area.contains(x, y)
        };
        let free = |h: Heading| occupied.is_none_or(|o| !o.contains(&h.step(head)));
        let reverse = self.heading.reverse();

        if !inside(self.heading) {
            let turns: Vec<Heading> = self
                .heading
                .perpendicular()
                .into_iter()
                .filter(|&h| inside(h))
                .collect();
            let safe: Vec<Heading> = turns.iter().copied().filter(|&h| free(h)).collect();
            self.heading = if let Some(h) = self.pick(&safe) {
                h
            } else if inside(reverse) && free(reverse) {
                reverse
            } else {
                self.pick(&turns).unwrap_or(reverse)
            };
        } else if !free(self.heading) {
            let safe: Vec<Heading> = Heading::ALL
                .into_iter()
                .filter(|&h| h != reverse && inside(h) && free(h))
                .collect();
            if let Some(h) = self.pick(&safe) {
                self.heading = h;
            }
        } else if self.rng.chance(TURN_CHANCE) {
            let turns: Vec<Heading> = self
                .heading
                .perpendicular()
                .into_iter()
                .filter(|&h| inside(h) && free(h))
                .collect();
            if let Some(h) = self.pick(&turns) {
                self.heading = h;
            }
        }

        let next = self.heading.step(head);
        if !area.contains(next.0, next.1) {
            // Boxed in on every side (1x1 area).
            return;
        }
        self.body.push_front(next);
        self.body.truncate(self.length);
    }
}

/// Area snake heads move in: the viewport minus the margin, or the whole viewport when it is too
/// small to keep one.
pub(crate) fn movement_area(viewport: Bounds) -> Bounds {
    let inner = Bounds::new(
        viewport.x + SNAKE_MARGIN,
        viewport.y + SNAKE_MARGIN,
        viewport.width - 2 * SNAKE_MARGIN,
        viewport.height - 2 * SNAKE_MARGIN,
    );
    if inner.is_empty() { viewport } else { inner }
}

fn render(snake: &Snake, color: &str, anim_id: &str) -> Vec<PixelData> {
    let n = snake.body.len();
    snake
        .body
        .iter()
        .enumerate()
        .map(|(j, &(x, y))| {
            let intensity = if n <= 1 {
                1.0
            } else {
                1.0 - (1.0 - TAIL_INTENSITY) * j as f64 / (n - 1) as f64
            };
            PixelData {
                is_head: j == 0,
                ..PixelData::tagged(x, y, modify_color_intensity(color, intensity), anim_id)
            }
        })
        .collect()
}

/// Snakes wandering inside the viewport.
///
/// Snake `k` draws from its own generator seeded with `k + snakeRandomSeed` (or a seed derived
/// from the animation id), so equal seeds reproduce equal paths.
pub fn generate_snake(
    anim: &AnimationObject,
    params: &SnakeParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    let mut out = OverlayMap::new();
    let vp = canvas.viewport();
    if anim.frames.is_empty() || vp.is_empty() || params.count == 0 {
        return out;
    }

    let area = movement_area(vp);
    let base_seed = params
        .random_seed
        .unwrap_or_else(|| seed_for(&anim.id, SNAKE_SALT));
    let mut snakes: Vec<Snake> = (0..params.count)
        .map(|k| Snake::spawn(base_seed.wrapping_add(u64::from(k)), area, params.length as usize))
        .collect();
    let colors: Vec<&str> = (0..snakes.len())
        .map(|k| {
            if params.colors.is_empty() {
                anim.color.as_str()
            } else {
                params.colors[k % params.colors.len()].as_str()
            }
        })
        .collect();

    for (i, frame_id) in anim.frames.iter().enumerate() {
        if i > 0 {
            for _ in 0..params.speed {
                step_all(&mut snakes, area, params.avoid_collisions);
            }
        }
        let pixels = snakes
            .iter()
            .zip(&colors)
            .flat_map(|(s, c)| render(s, c, &anim.id))
            .collect();
        emit(&mut out, frame_id, pixels);
    }
    out
}

fn step_all(snakes: &mut [Snake], area: Bounds, avoid_collisions: bool) {
    for k in 0..snakes.len() {
        let occupied: Option<HashSet<(i32, i32)>> = avoid_collisions.then(|| {
            snakes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .flat_map(|(_, s)| s.body.iter().copied())
                .collect()
        });
        snakes[k].advance(area, occupied.as_ref());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/snake.rs"]
mod tests;
