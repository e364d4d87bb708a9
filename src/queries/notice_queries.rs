use crate::model::Notice;
use crate::store::MockStore;

pub fn all_notices(store: &MockStore) -> &[Notice] {
    store.notices()
}
