//! # Preemption policy.
//!
//! A pure decision function: given the priority of an incoming admitted
//! alert and the current slot state, decide whether to interrupt the
//! in-flight emission before emitting.
//!
//! ## Rule
//! Preempt iff the slot is occupied **and** the incoming priority is
//! [`Priority::High`] or above, regardless of the occupying priority. A
//! High/Urgent alert always wins over whatever is playing but never waits
//! behind it. Lower or equal priorities never preempt; whether they queue or
//! drop is the backend's own queue-mode concern - the policy only decides
//! between stop-then-emit and plain emit.

use crate::alerts::Priority;
use crate::dispatch::slot::SlotOccupant;

/// Decides whether an admitted alert should interrupt the current emission.
///
/// Returns `true` iff `slot` is occupied and `incoming` is preempting
/// ([`Priority::High`] or [`Priority::Urgent`]); always `false` for an
/// empty slot.
pub fn should_preempt(incoming: Priority, slot: &Option<SlotOccupant>) -> bool {
    slot.is_some() && incoming.is_preempting()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Category;
    use crate::events::CorrelationId;

    fn occupied(priority: Priority) -> Option<SlotOccupant> {
        Some(SlotOccupant::new(
            Category::SpeedExcess,
            priority,
            CorrelationId::from_raw("p-1"),
        ))
    }

    #[test]
    fn test_empty_slot_never_preempts() {
        assert!(!should_preempt(Priority::Low, &None));
        assert!(!should_preempt(Priority::Normal, &None));
        assert!(!should_preempt(Priority::High, &None));
        assert!(!should_preempt(Priority::Urgent, &None));
    }

    #[test]
    fn test_high_and_urgent_preempt_occupied_slot() {
        assert!(should_preempt(Priority::High, &occupied(Priority::Low)));
        assert!(should_preempt(Priority::Urgent, &occupied(Priority::Normal)));
    }

    #[test]
    fn test_low_and_normal_never_preempt() {
        assert!(!should_preempt(Priority::Low, &occupied(Priority::Low)));
        assert!(!should_preempt(Priority::Normal, &occupied(Priority::Normal)));
    }

    #[test]
    fn test_occupant_priority_is_irrelevant() {
        // A High incoming wins even over an Urgent occupant.
        assert!(should_preempt(Priority::High, &occupied(Priority::Urgent)));
        // A Normal incoming loses even to a Low occupant.
        assert!(!should_preempt(Priority::Normal, &occupied(Priority::Low)));
    }
}
