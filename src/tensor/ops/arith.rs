/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量的四则运算（加减乘除及其自运算形式），均为“逐元素”运算。
 *                 该运算支持以下情况：
 *                 1. 其中一个操作数为纯数而另一个为张量：则返回的张量形状与该张量相同。
 *                 2. 两个操作数均为张量：两者形状必须严格一致，否则panic。
 *                 注意：这里不做广播（broadcasting），优化器的参数、梯度与累积状态总是同形状的。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use paste::paste;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

fn assert_same_shape(tensor_1: &Tensor, tensor_2: &Tensor, operator: Operator) {
    assert!(
        tensor_1.is_same_shape(tensor_2),
        "{}",
        TensorError::OperatorError {
            operator,
            tensor1_shape: tensor_1.shape().to_vec(),
            tensor2_shape: tensor_2.shape().to_vec(),
        }
    );
}

macro_rules! impl_elementwise_op {
    ($op_trait:ident, $method:ident, $op:tt, $op_assign:tt) => {
        paste! {
            /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与（不）带引用的张量↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
            impl<'a> $op_trait<&'a Tensor> for &Tensor {
                type Output = Tensor;

                fn $method(self, other: &'a Tensor) -> Tensor {
                    assert_same_shape(self, other, Operator::$op_trait);
                    Tensor {
                        data: &self.data $op &other.data,
                    }
                }
            }
            impl $op_trait<Tensor> for &Tensor {
                type Output = Tensor;

                fn $method(self, other: Tensor) -> Tensor {
                    self $op &other
                }
            }
            impl<'a> $op_trait<&'a Tensor> for Tensor {
                type Output = Tensor;

                fn $method(self, other: &'a Tensor) -> Tensor {
                    &self $op other
                }
            }
            impl $op_trait for Tensor {
                type Output = Tensor;

                fn $method(self, other: Tensor) -> Tensor {
                    &self $op &other
                }
            }
            /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与（不）带引用的张量↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

            /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与 f32↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
            impl $op_trait<f32> for &Tensor {
                type Output = Tensor;

                fn $method(self, scalar: f32) -> Tensor {
                    Tensor {
                        data: &self.data $op scalar,
                    }
                }
            }
            impl $op_trait<f32> for Tensor {
                type Output = Tensor;

                fn $method(self, scalar: f32) -> Tensor {
                    Tensor {
                        data: self.data $op scalar,
                    }
                }
            }
            impl $op_trait<Tensor> for f32 {
                type Output = Tensor;

                fn $method(self, tensor: Tensor) -> Tensor {
                    Tensor {
                        data: self $op tensor.data,
                    }
                }
            }
            impl<'a> $op_trait<&'a Tensor> for f32 {
                type Output = Tensor;

                fn $method(self, tensor: &'a Tensor) -> Tensor {
                    Tensor {
                        data: self $op &tensor.data,
                    }
                }
            }
            /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与 f32↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

            /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓自运算（原地修改）↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
            impl<'a> [<$op_trait Assign>]<&'a Tensor> for Tensor {
                fn [<$method _assign>](&mut self, other: &'a Tensor) {
                    assert_same_shape(self, other, Operator::[<$op_trait Assign>]);
                    self.data $op_assign &other.data;
                }
            }
            impl [<$op_trait Assign>] for Tensor {
                fn [<$method _assign>](&mut self, other: Tensor) {
                    *self $op_assign &other;
                }
            }
            impl [<$op_trait Assign>]<f32> for Tensor {
                fn [<$method _assign>](&mut self, scalar: f32) {
                    self.data $op_assign scalar;
                }
            }
            /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑自运算（原地修改）↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
        }
    };
}

impl_elementwise_op!(Add, add, +, +=);
impl_elementwise_op!(Sub, sub, -, -=);
impl_elementwise_op!(Mul, mul, *, *=);
impl_elementwise_op!(Div, div, /, /=);
