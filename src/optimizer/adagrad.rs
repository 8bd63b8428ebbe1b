/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : AdaGrad 优化器
 */

use super::base::Optimizer;
use super::state::{SlotStore, SquaredGrad};
use super::{AdaGradConfig, OptimError, OptimizerState, ParamSet};

/// 分母中防止除零的平滑项
const EPSILON: f32 = 1e-7;

/// AdaGrad：按历史梯度平方和自适应地缩小各元素的学习率
///
/// - h = h + ∇θ²
/// - θ = θ - α * ∇θ / (√h + 1e-7)
#[derive(Debug, Clone, Default)]
pub struct AdaGrad {
    config: AdaGradConfig,
    state: SlotStore<SquaredGrad>,
}

impl AdaGrad {
    const NAME: &'static str = "AdaGrad";

    /// 创建新的 AdaGrad 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    pub fn new(lr: f32) -> Result<Self, OptimError> {
        Self::from_config(AdaGradConfig { lr })
    }

    /// 使用缺省超参数（lr=0.01）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: AdaGradConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &AdaGradConfig {
        &self.config
    }
}

impl Optimizer for AdaGrad {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let lr = self.config.lr;
        for (param, grad, SquaredGrad { h }) in self.state.zip_mut(params, grads) {
            *h += &grad.square();
            *param -= &((grad * lr) / (h.sqrt() + EPSILON));
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
