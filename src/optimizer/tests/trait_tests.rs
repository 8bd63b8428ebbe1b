/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Optimizer trait 通用行为测试
 *
 * 这些测试验证所有优化器实现的共同行为和 trait 约束
 */

use super::param_set;
use crate::optimizer::{
    AdaGrad, AdaStandard, Adam, AnyOptimizer, Momentum, Nesterov, Optimizer, ParamSet, RMSprop,
    SDProp, SGD,
};
use crate::tensor::Tensor;

/// 每种优化器各一个（全部使用缺省超参数）
fn all_optimizers() -> Vec<Box<dyn Optimizer>> {
    vec![
        Box::new(SGD::new_default()),
        Box::new(Momentum::new_default()),
        Box::new(Nesterov::new_default()),
        Box::new(AdaGrad::new_default()),
        Box::new(RMSprop::new_default()),
        Box::new(Adam::new_default()),
        Box::new(SDProp::new_default()),
        Box::new(AdaStandard::new_default()),
    ]
}

fn initial_params() -> ParamSet {
    param_set(&[
        ("w", Tensor::new_random_seeded(-1.0, 1.0, &[3, 4], 1)),
        ("b", Tensor::new_random_seeded(-1.0, 1.0, &[4], 2)),
    ])
}

fn grads_at(step: u64) -> ParamSet {
    param_set(&[
        ("w", Tensor::new_random_seeded(-1.0, 1.0, &[3, 4], 100 + step)),
        ("b", Tensor::new_random_seeded(-1.0, 1.0, &[4], 200 + step)),
    ])
}

#[test]
fn test_optimizer_names() {
    let names = all_optimizers()
        .iter()
        .map(|optimizer| optimizer.name())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "SGD",
            "Momentum",
            "Nesterov",
            "AdaGrad",
            "RMSprop",
            "Adam",
            "SDProp",
            "AdaStandard"
        ]
    );
}

#[test]
fn test_determinism() {
    // 相同的初始参数、配置与梯度序列，两个独立实例得到逐位相同的参数轨迹
    for (mut optimizer_1, mut optimizer_2) in all_optimizers().into_iter().zip(all_optimizers()) {
        let mut params_1 = initial_params();
        let mut params_2 = initial_params();
        for step in 0..20 {
            let grads = grads_at(step);
            optimizer_1.update(&mut params_1, &grads).unwrap();
            optimizer_2.update(&mut params_2, &grads).unwrap();
            assert_eq!(params_1, params_2, "{}在第{}步出现偏差", optimizer_1.name(), step);
        }
        assert_eq!(optimizer_1.state(), optimizer_2.state());
        assert!(params_1.values().all(Tensor::is_finite));
    }
}

#[test]
fn test_zero_gradient_fixed_point() {
    // 从零状态出发，全零梯度的一步不改变任何参数
    for mut optimizer in all_optimizers() {
        let mut params = initial_params();
        let grads = params
            .iter()
            .map(|(key, tensor)| (key.clone(), tensor.zeros_like()))
            .collect::<ParamSet>();
        optimizer.update(&mut params, &grads).unwrap();
        assert_eq!(params, initial_params(), "{}改变了参数", optimizer.name());
    }
}

#[test]
fn test_each_optimizer_descends() {
    // 梯度为正时，第一步都应减小参数
    for mut optimizer in all_optimizers() {
        let mut params = param_set(&[("w", Tensor::new(&[1.0, 1.0], &[2]))]);
        let grads = param_set(&[("w", Tensor::new(&[0.5, 2.0], &[2]))]);
        optimizer.update(&mut params, &grads).unwrap();
        assert!(
            params["w"].to_vec().iter().all(|x| *x < 1.0),
            "{}没有沿负梯度方向更新",
            optimizer.name()
        );
    }
}

#[test]
fn test_timestep_only_for_bias_corrected_optimizers() {
    let expected = [0, 0, 0, 0, 0, 3, 3, 3];
    for (mut optimizer, expected) in all_optimizers().into_iter().zip(expected) {
        let mut params = initial_params();
        for step in 0..3 {
            optimizer.update(&mut params, &grads_at(step)).unwrap();
        }
        assert_eq!(optimizer.timestep(), expected, "{}", optimizer.name());
    }
}

#[test]
fn test_any_optimizer_dispatch() {
    // AnyOptimizer 与具体类型的行为完全一致
    let mut any: AnyOptimizer = Adam::new(0.01, 0.9, 0.999).unwrap().into();
    let mut adam = Adam::new(0.01, 0.9, 0.999).unwrap();
    let mut params_any = initial_params();
    let mut params_adam = initial_params();
    for step in 0..5 {
        any.update(&mut params_any, &grads_at(step)).unwrap();
        adam.update(&mut params_adam, &grads_at(step)).unwrap();
    }
    assert_eq!(params_any, params_adam);
    assert_eq!(any.name(), "Adam");
    assert_eq!(any.learning_rate(), 0.01);
    assert_eq!(any.timestep(), 5);
    assert!(matches!(any, AnyOptimizer::Adam(_)));
}

#[test]
fn test_clone_does_not_share_state() {
    let mut momentum = Momentum::new_default();
    let mut params = initial_params();
    momentum.update(&mut params, &grads_at(0)).unwrap();

    let snapshot = momentum.clone();
    momentum.update(&mut params, &grads_at(1)).unwrap();
    // 克隆出的实例拥有独立的累积状态
    assert_ne!(snapshot.state(), momentum.state());
}
