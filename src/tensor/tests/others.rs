/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量比较及其他运算测试
 */

use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

use crate::tensor::Tensor;

#[test]
fn test_sqrt_square_abs() {
    let a = Tensor::new(&[4.0, 9.0, 0.0], &[3]);
    assert_eq!(a.sqrt(), Tensor::new(&[2.0, 3.0, 0.0], &[3]));
    let b = Tensor::new(&[-2.0, 3.0], &[2]);
    assert_eq!(b.square(), Tensor::new(&[4.0, 9.0], &[2]));
    assert_eq!(b.abs(), Tensor::new(&[2.0, 3.0], &[2]));
    assert_eq!(b.sum(), 1.0);
}

#[test]
fn test_from_f32() {
    assert_eq!(Tensor::from(2.0), Tensor::new(&[2.0], &[1]));
}

#[test]
fn test_approx_eq() {
    let a = Tensor::new(&[1.0, 2.0], &[2]);
    let b = Tensor::new(&[1.0 + 1e-6, 2.0 - 1e-6], &[2]);
    assert_abs_diff_eq!(a, b, epsilon = 1e-5);
    assert_relative_eq!(a, b, max_relative = 1e-5);
    // 形状不同的张量永远不相等
    assert_abs_diff_ne!(a, Tensor::new(&[1.0, 2.0], &[1, 2]), epsilon = 1.0);
}
