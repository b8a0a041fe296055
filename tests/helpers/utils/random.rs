use crate::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::{RefCell, UnsafeCell};
use std::rc::Rc;

struct FakeDistribution<T> {
    values: RefCell<Vec<T>>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values: RefCell::new(values) }
    }

    pub fn next(&self) -> T {
        self.values.borrow_mut().pop().expect("no more scripted values")
    }
}

/// A random source which returns values from the given scripts in their order.
pub struct FakeRandom {
    ints: FakeDistribution<i32>,
    reals: FakeDistribution<Float>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: FakeDistribution::new(ints), reals: FakeDistribution::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.next()
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.next()
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::with_rng(Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(0))))
    }
}

/// A random source which echoes back one of the requested range bounds.
pub struct EchoRandom {
    use_min: bool,
}

impl EchoRandom {
    pub fn new(use_min: bool) -> Self {
        Self { use_min }
    }
}

impl Random for EchoRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if self.use_min { min } else { max }
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if self.use_min { min } else { max }
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::with_rng(Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(0))))
    }
}
