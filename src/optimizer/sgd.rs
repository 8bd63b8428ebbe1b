/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : SGD 优化器
 */

use super::base::Optimizer;
use super::state::{NoSlots, SlotStore};
use super::{OptimError, OptimizerState, ParamSet, SGDConfig};

/// 随机梯度下降（Stochastic Gradient Descent）
///
/// θ = θ - α * ∇θ
///
/// 无累积状态，但首次更新后同样固定参数的键与形状。
#[derive(Debug, Clone, Default)]
pub struct SGD {
    config: SGDConfig,
    state: SlotStore<NoSlots>,
}

impl SGD {
    const NAME: &'static str = "SGD";

    /// 创建新的 SGD 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    pub fn new(lr: f32) -> Result<Self, OptimError> {
        Self::from_config(SGDConfig { lr })
    }

    /// 使用缺省超参数（lr=0.01）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: SGDConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &SGDConfig {
        &self.config
    }
}

impl Optimizer for SGD {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let lr = self.config.lr;
        for (param, grad, _) in self.state.zip_mut(params, grads) {
            *param -= &(grad * lr);
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
