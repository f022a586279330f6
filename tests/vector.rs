//! # Behavior of `Vector`
//!
//! Written against the public API only, as an external user of the crate would.
use utmatrix::data::linear_algebra::MAX_VECTOR_SIZE;
use utmatrix::data::linear_algebra::vector::Vector;
use utmatrix::error::LinearAlgebraError;

fn filled(values: &[i32]) -> Vector<i32> {
    let mut v = Vector::new(values.len() as isize).unwrap();
    for (i, &value) in values.iter().enumerate() {
        v[i as isize] = value;
    }
    v
}

#[test]
fn can_create_vector_with_positive_length() {
    assert!(Vector::<i32>::new(5).is_ok());
}

#[test]
fn cant_create_too_large_vector() {
    assert!(Vector::<i32>::new(MAX_VECTOR_SIZE + 1).is_err());
}

#[test]
fn throws_when_create_vector_with_negative_length() {
    assert!(matches!(Vector::<i32>::new(-5), Err(LinearAlgebraError::InvalidArgument(_))));
}

#[test]
fn throws_when_create_vector_with_negative_start_index() {
    assert!(matches!(
        Vector::<i32>::with_start_index(5, -2),
        Err(LinearAlgebraError::InvalidArgument(_)),
    ));
}

#[test]
fn copied_vector_is_equal_to_source_one() {
    let v1 = Vector::<i32>::new(4).unwrap();
    let v2 = v1.clone();

    assert_eq!(v1, v2);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let v = Box::new(filled(&[1; 10]));
    let copy = (*v).clone();
    drop(v);
    let expected = filled(&[1; 10]);

    assert_eq!(expected, copy);
}

#[test]
fn can_get_size_and_start_index() {
    assert_eq!(Vector::<i32>::new(4).unwrap().len(), 4);
    assert_eq!(Vector::<i32>::with_start_index(4, 2).unwrap().start_index(), 2);
}

#[test]
fn can_set_and_get_element() {
    let mut v = Vector::<i32>::new(4).unwrap();
    v[0] = 4;

    assert_eq!(4, v[0]);
}

#[test]
fn fails_when_set_element_with_negative_index() {
    let mut v = Vector::<i32>::new(4).unwrap();

    assert!(matches!(v.set(-1, 1), Err(LinearAlgebraError::IndexOutOfRange { .. })));
}

#[test]
fn fails_when_set_element_with_too_large_index() {
    let mut v = Vector::<i32>::new(4).unwrap();

    assert!(matches!(
        v.set(MAX_VECTOR_SIZE + 1, 1),
        Err(LinearAlgebraError::IndexOutOfRange { .. }),
    ));
}

#[test]
fn can_assign_vector_to_itself() {
    let mut v = filled(&[1, 2, 3, 4]);
    v = v.clone();

    assert_eq!(v, filled(&[1, 2, 3, 4]));
}

#[test]
fn assign_changes_vector_size() {
    let mut v1 = Vector::<i32>::new(1).unwrap();
    let v2 = filled(&[0, 0, 0]);
    let v3 = filled(&[0, 0, 0]);
    v1.assign(&v2);

    assert_eq!(v1.len(), 3);
    assert_eq!(v1, v3);

    let mut v4 = Vector::<i32>::new(5).unwrap();
    v4.clone_from(&v2);
    assert_eq!(v4, v3);
}

#[test]
fn compare_vectors() {
    let v = filled(&[1, 2]);

    assert_eq!(v, v);
    assert_eq!(filled(&[1, 2]), v);
    assert_ne!(Vector::<i32>::new(4).unwrap(), Vector::<i32>::new(2).unwrap());
}

#[test]
fn scalar_operations() {
    assert_eq!(filled(&[0, 0]) + 1, filled(&[1, 1]));
    assert_eq!(filled(&[1, 1]) - 1, filled(&[0, 0]));
    assert_eq!(filled(&[1, 1]) * 3, filled(&[3, 3]));
}

#[test]
fn add_and_subtract_vectors() {
    let v1 = filled(&[1, 1]);
    let v2 = filled(&[2, 2]);

    assert_eq!((&v1 + &v2).unwrap(), filled(&[3, 3]));
    assert_eq!((&filled(&[3, 3]) - &v2).unwrap(), filled(&[1, 1]));
    assert_eq!(&(&v1 + &v2).unwrap() - &v2, Ok(v1.clone()));
}

#[test]
fn cant_combine_vectors_with_not_equal_size() {
    let v1 = Vector::<i32>::new(2).unwrap();
    let v2 = Vector::<i32>::new(3).unwrap();

    assert!(matches!(&v1 + &v2, Err(LinearAlgebraError::SizeMismatch { left: 2, right: 3 })));
    assert!(matches!(&v1 - &v2, Err(LinearAlgebraError::SizeMismatch { .. })));
    assert!(matches!(&v1 * &v2, Err(LinearAlgebraError::SizeMismatch { .. })));
}

#[test]
fn inner_product() {
    let v = filled(&[1, 2]);

    assert_eq!(&v * &v, Ok(5));
}

#[test]
fn errors_propagate() -> Result<(), LinearAlgebraError> {
    let mut v = Vector::with_start_index(3, 1)?;
    v.set(1, 2)?;
    v.set(3, 4)?;
    let sum = (&v + &v)?;

    assert_eq!(*sum.get(3)?, 8);
    assert_eq!(sum.to_string(), "4 0 8");
    Ok(())
}
