/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : AdaGrad 优化器测试
 */

use approx::assert_abs_diff_eq;

use super::{scalar_set, value_of};
use crate::optimizer::{AdaGrad, Optimizer};
use crate::tensor::Tensor;

#[test]
fn test_adagrad_update() {
    // lr=0.1, param=1.0, grad=1.0 连续两步
    // 第1步: h = 1.0, param = 1.0 - 0.1 / (1 + 1e-7) ≈ 0.9000
    // 第2步: h = 2.0, param ≈ 0.9000 - 0.1 / 1.4142 ≈ 0.8293
    let mut adagrad = AdaGrad::new(0.1).unwrap();
    let mut params = scalar_set(1.0);
    let grads = scalar_set(1.0);

    adagrad.update(&mut params, &grads).unwrap();
    assert_abs_diff_eq!(value_of(&params, "w"), 0.9, epsilon = 1e-6);
    let state = adagrad.state();
    assert_eq!(
        state.entries.as_ref().unwrap()["w"].slots["h"],
        Tensor::new(&[1.0], &[1])
    );

    adagrad.update(&mut params, &grads).unwrap();
    assert_abs_diff_eq!(value_of(&params, "w"), 0.829_289_3, epsilon = 1e-5);
    let state = adagrad.state();
    assert_eq!(
        state.entries.as_ref().unwrap()["w"].slots["h"],
        Tensor::new(&[2.0], &[1])
    );
}

#[test]
fn test_adagrad_step_shrinks() {
    // 恒定梯度下，每一步的步长单调减小
    let mut adagrad = AdaGrad::new_default();
    let mut params = scalar_set(0.0);
    let mut last_step = f32::MAX;
    for _ in 0..10 {
        let before = value_of(&params, "w");
        adagrad.update(&mut params, &scalar_set(0.5)).unwrap();
        let step = before - value_of(&params, "w");
        assert!(step > 0.0 && step < last_step);
        last_step = step;
    }
}
