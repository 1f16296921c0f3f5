use rand::Rng;

/// Uniform source of values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of values, repeating the last one once exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.pos.min(self.values.len() - 1)];
        self.pos += 1;
        value
    }
}

/// Uniformly pick one element. `None` for an empty slice.
pub fn pick<'a, T, S>(source: &mut S, items: &'a [T]) -> Option<&'a T>
where
    S: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let index = (source.next_unit() * items.len() as f64) as usize;
    items.get(index.min(items.len() - 1))
}
