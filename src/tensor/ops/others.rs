/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量的比较、开方、平方等其他运算
 */

use crate::tensor::Tensor;
use approx::{AbsDiffEq, RelativeEq};
use ndarray::Zip;
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

// 供单元测试中的`assert_abs_diff_eq!`、`assert_relative_eq!`直接比较两个张量
impl AbsDiffEq for Tensor {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.is_same_shape(other)
            && Zip::from(&self.data)
                .and(&other.data)
                .all(|a, b| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Tensor {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.is_same_shape(other)
            && Zip::from(&self.data)
                .and(&other.data)
                .all(|a, b| a.relative_eq(b, epsilon, max_relative))
    }
}

impl Tensor {
    /// 逐元素开平方
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::sqrt),
        }
    }

    /// 逐元素平方（`x * x`）
    pub fn square(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(|x| x * x),
        }
    }

    /// 逐元素取绝对值
    pub fn abs(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::abs),
        }
    }

    /// 对张量中的所有元素求和并返回纯数
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }
}
