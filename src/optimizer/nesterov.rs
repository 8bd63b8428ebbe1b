/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Nesterov 加速梯度优化器（http://arxiv.org/abs/1212.0901）
 */

use super::base::Optimizer;
use super::state::{SlotStore, Velocity};
use super::{NesterovConfig, OptimError, OptimizerState, ParamSet};

/// Nesterov 加速梯度（Nesterov's Accelerated Gradient）
///
/// 采用无需“前瞻”梯度的融合两项形式：
/// - v = momentum * v - α * ∇θ
/// - θ = θ + momentum² * v - (1 + momentum) * α * ∇θ
///
/// 两个加项按上述顺序依次作用于θ。
#[derive(Debug, Clone, Default)]
pub struct Nesterov {
    config: NesterovConfig,
    state: SlotStore<Velocity>,
}

impl Nesterov {
    const NAME: &'static str = "Nesterov";

    /// 创建新的 Nesterov 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `momentum`: 速度的衰减率，须在[0, 1)内
    pub fn new(lr: f32, momentum: f32) -> Result<Self, OptimError> {
        Self::from_config(NesterovConfig { lr, momentum })
    }

    /// 使用缺省超参数（lr=0.01, momentum=0.9）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: NesterovConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &NesterovConfig {
        &self.config
    }
}

impl Optimizer for Nesterov {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let NesterovConfig { lr, momentum } = self.config;
        for (param, grad, Velocity { v }) in self.state.zip_mut(params, grads) {
            *v *= momentum;
            *v -= &(grad * lr);
            *param += &(&*v * (momentum * momentum));
            *param -= &(grad * ((1.0 + momentum) * lr));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn timestep(&self) -> u64 {
        self.state.step()
    }

    fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    fn state(&self) -> OptimizerState {
        self.state.snapshot()
    }

    fn load_state(&mut self, state: OptimizerState) -> Result<(), OptimError> {
        self.state.restore(Self::NAME, state, false)
    }
}
