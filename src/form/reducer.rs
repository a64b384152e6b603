//! Reducer for the form state.

use std::marker::PhantomData;

use crate::key::FieldKey;
use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{initialize, FieldEntry, FormState};

/// Reducer for form state transitions.
///
/// Pure function. Validation happens before dispatch; the reducer only
/// stores what it is given.
pub struct FormReducer<K>(PhantomData<fn() -> K>);

impl<K: FieldKey> Reducer for FormReducer<K> {
    type State = FormState<K>;
    type Intent = FormIntent<K>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FieldUpdate { key, value, errors } => {
                if !state.contains(&key) {
                    // The key set is fixed; an update may never grow it.
                    tracing::warn!(field = key.name(), "Dropped update for undeclared field");
                    return state;
                }

                let mut fields = state.to_fields();
                fields.insert(key, FieldEntry { value, errors });
                FormState::from_fields(fields)
            }

            FormIntent::Reset { init } => initialize(&init),
        }
    }
}
