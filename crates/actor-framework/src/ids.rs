//! # Id Generation
//!
//! A [`ResourceActor`](crate::ResourceActor) asks its generator for a fresh id on every
//! `Create`. Generators are plain closures so each resource can pick its own scheme:
//! sequential integers for catalog products, time + random suffix for orders.

/// Boxed id generator owned by an actor.
pub type IdGenerator<I> = Box<dyn FnMut() -> I + Send>;

/// Returns a generator yielding `1, 2, 3, ...` converted into the target id type.
pub fn sequential_ids<I: From<u32> + 'static>() -> impl FnMut() -> I + Send + 'static {
    let mut next = 0u32;
    move || {
        next += 1;
        I::from(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct ScoopId(u32);

    impl From<u32> for ScoopId {
        fn from(id: u32) -> Self {
            Self(id)
        }
    }

    #[test]
    fn sequential_ids_start_at_one() {
        let mut next = sequential_ids::<ScoopId>();
        assert_eq!(next(), ScoopId(1));
        assert_eq!(next(), ScoopId(2));
        assert_eq!(next(), ScoopId(3));
    }
}
