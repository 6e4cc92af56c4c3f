mod seperate;

pub use seperate::seperate;

pub trait VecUtil {
    type Item;

    fn seperate(self, by: usize) -> Vec<Vec<Self::Item>>;
}

impl<T> VecUtil for Vec<T> {
    type Item = T;

    fn seperate(self, by: usize) -> Vec<Vec<Self::Item>> {
        seperate(self, by)
    }
}
