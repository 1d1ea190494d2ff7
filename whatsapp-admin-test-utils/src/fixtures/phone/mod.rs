pub mod data;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn phone<'a>(&'a mut self) -> PhoneFixtures<'a> {
        PhoneFixtures { setup: self }
    }
}

pub struct PhoneFixtures<'a> {
    setup: &'a mut TestContext,
}
