//! Typed numeric identifiers and the per-kind id allocator.
//!
//! Every entity the external solver consumes is addressed by a plain
//! integer label, 1-based and strictly increasing in allocation order.
//! Labels are never reused within one model build, so several rings can
//! be composed into a single model without collisions.

use std::marker::PhantomData;

/// Behavior shared by all typed entity identifiers.
pub trait EntityId: Copy + Eq + Ord {
    /// Wraps a raw numeric label.
    fn from_raw(raw: u32) -> Self;

    /// Returns the raw numeric label.
    fn raw(self) -> u32;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl EntityId for $name {
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

entity_id! {
    /// Numeric label of a geometric point.
    PointId
}
entity_id! {
    /// Numeric label of a curve (arc or line).
    CurveId
}
entity_id! {
    /// Numeric label of a wire (closed loop of curves).
    WireId
}
entity_id! {
    /// Numeric label of a side (meshable face bounded by one wire).
    SideId
}
entity_id! {
    /// Numeric label of a material (constitutive or contact law).
    MaterialId
}
entity_id! {
    /// Numeric label of an interaction (field applicator or contact pair).
    InteractionId
}

/// A contiguous block of freshly allocated identifiers of one kind.
#[derive(Debug, Clone, Copy)]
pub struct IdBlock<T> {
    start: u32,
    count: u32,
    _kind: PhantomData<T>,
}

impl<T: EntityId> IdBlock<T> {
    fn new(start: u32, count: u32) -> Self {
        Self {
            start,
            count,
            _kind: PhantomData,
        }
    }

    /// Returns the `index`-th identifier of the block.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count`.
    #[must_use]
    pub fn id(&self, index: u32) -> T {
        assert!(index < self.count, "id block index out of range");
        T::from_raw(self.start + index)
    }

    /// Returns the first identifier of the block.
    #[must_use]
    pub fn first(&self) -> T {
        T::from_raw(self.start)
    }

    /// Number of identifiers in the block.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Iterates over the identifiers of the block in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (self.start..self.start + self.count).map(T::from_raw)
    }
}

/// Per-kind monotonic id allocator for one model-build session.
///
/// Six independent counters, one per entity kind, each starting at 1 and
/// never reset. Blocks handed out for the same kind never overlap, which
/// keeps ids unique across every ring of the model. Construction is
/// sequential; the allocator is deliberately not thread-safe.
#[derive(Debug)]
pub struct IdAllocator {
    next_point: u32,
    next_curve: u32,
    next_wire: u32,
    next_side: u32,
    next_material: u32,
    next_interaction: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_point: 1,
            next_curve: 1,
            next_wire: 1,
            next_side: 1,
            next_material: 1,
            next_interaction: 1,
        }
    }
}

impl IdAllocator {
    /// Creates a fresh allocator with every counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(counter: &mut u32, count: u32) -> u32 {
        // Handing out an already-issued label would corrupt the model,
        // so counter overflow is a fatal invariant breach.
        assert!(
            counter.checked_add(count).is_some(),
            "entity id counter overflow"
        );
        let start = *counter;
        *counter += count;
        start
    }

    /// Allocates a contiguous block of `count` point ids.
    pub fn alloc_points(&mut self, count: u32) -> IdBlock<PointId> {
        IdBlock::new(Self::bump(&mut self.next_point, count), count)
    }

    /// Allocates a contiguous block of `count` curve ids.
    pub fn alloc_curves(&mut self, count: u32) -> IdBlock<CurveId> {
        IdBlock::new(Self::bump(&mut self.next_curve, count), count)
    }

    /// Allocates a contiguous block of `count` wire ids.
    pub fn alloc_wires(&mut self, count: u32) -> IdBlock<WireId> {
        IdBlock::new(Self::bump(&mut self.next_wire, count), count)
    }

    /// Allocates a contiguous block of `count` side ids.
    pub fn alloc_sides(&mut self, count: u32) -> IdBlock<SideId> {
        IdBlock::new(Self::bump(&mut self.next_side, count), count)
    }

    /// Allocates a single material id.
    pub fn alloc_material(&mut self) -> MaterialId {
        MaterialId::from_raw(Self::bump(&mut self.next_material, 1))
    }

    /// Allocates a contiguous block of `count` interaction ids.
    pub fn alloc_interactions(&mut self, count: u32) -> IdBlock<InteractionId> {
        IdBlock::new(Self::bump(&mut self.next_interaction, count), count)
    }

    /// The id the next point allocation will start at.
    #[must_use]
    pub fn next_point(&self) -> PointId {
        PointId::from_raw(self.next_point)
    }

    /// The id the next curve allocation will start at.
    #[must_use]
    pub fn next_curve(&self) -> CurveId {
        CurveId::from_raw(self.next_curve)
    }

    /// The id the next wire allocation will start at.
    #[must_use]
    pub fn next_wire(&self) -> WireId {
        WireId::from_raw(self.next_wire)
    }

    /// The id the next side allocation will start at.
    #[must_use]
    pub fn next_side(&self) -> SideId {
        SideId::from_raw(self.next_side)
    }

    /// The id the next material allocation will return.
    #[must_use]
    pub fn next_material(&self) -> MaterialId {
        MaterialId::from_raw(self.next_material)
    }

    /// The id the next interaction allocation will start at.
    #[must_use]
    pub fn next_interaction(&self) -> InteractionId {
        InteractionId::from_raw(self.next_interaction)
    }
}
