/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : AdaStandard 优化器测试
 */

use approx::assert_abs_diff_eq;

use super::{scalar_set, value_of};
use crate::optimizer::{AdaStandard, Optimizer};

#[test]
fn test_ada_standard_creation() {
    let ada_standard = AdaStandard::new_default();
    let config = ada_standard.config();
    assert_eq!(config.lr, 0.001);
    assert_eq!(config.beta1, 0.7);
    assert_eq!(config.beta2, 0.99);
    assert_eq!(config.epsilon, 1e-7);
}

#[test]
fn test_ada_standard_update() {
    // lr=0.1, β1=0.5, β2=0.5, ε=1e-7, param=1.0, grad=2.0 连续两步
    // 第1步: lr_t = 0.1 * √0.5 / 0.5 ≈ 0.141421
    //        v = 0.5 * (0.5 * (2 - 0)² - 0) = 1（先更新 v，用的是更新前的 m=0）
    //        m = 0.5 * (2 - 2 * 0) = 1
    //        param = 1 - 0.141421 * 1 / (1 + 1e-7) ≈ 0.858579
    // 第2步: lr_t = 0.1 * √0.75 / 0.75 ≈ 0.115470
    //        v = 1 + 0.5 * (0.5 * (2 - 1)² - 1) = 0.75
    //        m = 1 + 0.5 * (2 - 2 * 1) = 1
    //        param ≈ 0.858579 - 0.115470 / √0.75 ≈ 0.725245
    let mut ada_standard = AdaStandard::new(0.1, 0.5, 0.5, 1e-7).unwrap();
    let mut params = scalar_set(1.0);
    let grads = scalar_set(2.0);

    ada_standard.update(&mut params, &grads).unwrap();
    assert_eq!(ada_standard.timestep(), 1);
    assert_abs_diff_eq!(value_of(&params, "w"), 0.858_578_6, epsilon = 1e-5);
    let state = ada_standard.state();
    let entry = &state.entries.as_ref().unwrap()["w"];
    assert_abs_diff_eq!(entry.slots["v"].number().unwrap(), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(entry.slots["m"].number().unwrap(), 1.0, epsilon = 1e-6);

    ada_standard.update(&mut params, &grads).unwrap();
    assert_eq!(ada_standard.timestep(), 2);
    assert_abs_diff_eq!(value_of(&params, "w"), 0.725_245_3, epsilon = 1e-5);
    let state = ada_standard.state();
    let entry = &state.entries.as_ref().unwrap()["w"];
    assert_abs_diff_eq!(entry.slots["v"].number().unwrap(), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(entry.slots["m"].number().unwrap(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_ada_standard_first_moment_recurrence() {
    // m 的递推为 m += (1 - β1) * (g - 2m)，恒定梯度下收敛到 g / 2 而不是 g
    let mut ada_standard = AdaStandard::new(0.001, 0.5, 0.9, 1e-7).unwrap();
    let mut params = scalar_set(0.0);
    for _ in 0..100 {
        ada_standard.update(&mut params, &scalar_set(1.0)).unwrap();
    }
    let state = ada_standard.state();
    let entry = &state.entries.as_ref().unwrap()["w"];
    assert_abs_diff_eq!(entry.slots["m"].number().unwrap(), 0.5, epsilon = 1e-5);
}
