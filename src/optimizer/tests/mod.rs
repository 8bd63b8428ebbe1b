/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - sgd / momentum / nesterov / adagrad / rmsprop / adam / sdprop / ada_standard: 各优化器的更新公式
 * - contract: update 的键、形状约定与原子性
 * - trait_tests: Optimizer trait 通用行为（确定性、零梯度不动点、动态分发）
 * - config: 超参数校验与 JSON 配置
 * - state: 状态快照的导出、恢复与持久化
 */

mod ada_standard;
mod adagrad;
mod trait_tests;

use crate::optimizer::ParamSet;
use crate::tensor::Tensor;

/// 由若干 (键, 张量) 构造参数集合
fn param_set(entries: &[(&str, Tensor)]) -> ParamSet {
    entries
        .iter()
        .map(|(key, tensor)| (key.to_string(), tensor.clone()))
        .collect()
}

/// 只含一个形状为[1]的参数`w`的集合
fn scalar_set(value: f32) -> ParamSet {
    param_set(&[("w", Tensor::new(&[value], &[1]))])
}

/// 取出参数集合中某个标量参数的值
fn value_of(params: &ParamSet, key: &str) -> f32 {
    params[key].number().unwrap()
}
