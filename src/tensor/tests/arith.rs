/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量四则运算测试
 */

use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_tensor_with_tensor() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = Tensor::new(&[4.0, 3.0, 2.0, 1.0], &[2, 2]);

    assert_eq!(&a + &b, Tensor::new(&[5.0; 4], &[2, 2]));
    assert_eq!(&a - &b, Tensor::new(&[-3.0, -1.0, 1.0, 3.0], &[2, 2]));
    assert_eq!(&a * &b, Tensor::new(&[4.0, 6.0, 6.0, 4.0], &[2, 2]));
    assert_eq!(&a / &b, Tensor::new(&[0.25, 2.0 / 3.0, 1.5, 4.0], &[2, 2]));
    // 所有权形式与引用形式结果一致
    assert_eq!(a.clone() + b.clone(), &a + &b);
    assert_eq!(a.clone() - &b, &a - b.clone());
}

#[test]
fn test_tensor_with_number() {
    let a = Tensor::new(&[1.0, 2.0], &[2]);
    assert_eq!(&a + 1.0, Tensor::new(&[2.0, 3.0], &[2]));
    assert_eq!(&a - 1.0, Tensor::new(&[0.0, 1.0], &[2]));
    assert_eq!(a.clone() * 2.0, Tensor::new(&[2.0, 4.0], &[2]));
    assert_eq!(&a / 2.0, Tensor::new(&[0.5, 1.0], &[2]));
    assert_eq!(2.0 * &a, Tensor::new(&[2.0, 4.0], &[2]));
    assert_eq!(1.0 - a.clone(), Tensor::new(&[0.0, -1.0], &[2]));
    assert_eq!(2.0 / &a, Tensor::new(&[2.0, 1.0], &[2]));
}

#[test]
fn test_assign_ops() {
    let mut a = Tensor::new(&[1.0, 2.0], &[2]);
    let b = Tensor::new(&[0.5, 0.5], &[2]);
    a += &b;
    assert_eq!(a, Tensor::new(&[1.5, 2.5], &[2]));
    a -= b.clone();
    assert_eq!(a, Tensor::new(&[1.0, 2.0], &[2]));
    a *= 3.0;
    assert_eq!(a, Tensor::new(&[3.0, 6.0], &[2]));
    a /= &Tensor::new(&[3.0, 2.0], &[2]);
    assert_eq!(a, Tensor::new(&[1.0, 3.0], &[2]));
    a -= 1.0;
    assert_eq!(a, Tensor::new(&[0.0, 2.0], &[2]));
}

#[test]
fn test_mismatched_shapes_panic() {
    let a = Tensor::zeros(&[2, 2]);
    let b = Tensor::zeros(&[4]);
    assert_panic!(
        &a + &b,
        "形状不一致，故无法相加：第一个张量的形状为[2, 2]，第二个张量的形状为[4]"
    );
    let mut c = Tensor::zeros(&[1, 4]);
    assert_panic!(
        c -= &b,
        "形状不一致，故无法自相减：第一个张量的形状为[1, 4]，第二个张量的形状为[4]"
    );
}
